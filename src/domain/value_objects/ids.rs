//! Strongly-typed identifiers for domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a room
///
/// Rooms are keyed by the millisecond timestamp of their creation, rendered
/// as a decimal string. Uniqueness against existing rooms is enforced by the
/// storage gateway when it allocates a new id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a creation instant
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    /// The id one millisecond after this one, used to resolve collisions.
    /// Ids that are not numeric get a numeric suffix instead.
    pub fn next(&self) -> Self {
        match self.0.parse::<i64>() {
            Ok(millis) => Self((millis + 1).to_string()),
            Err(_) => Self(format!("{}-1", self.0)),
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a moodboard item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodboardItemId(Uuid);

impl MoodboardItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for MoodboardItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MoodboardItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MoodboardItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
