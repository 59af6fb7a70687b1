//! Moodboard entity
//!
//! Free-floating text notes, independent of any room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MoodboardItemId;

/// A standalone text note on the moodboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodboardItem {
    pub id: MoodboardItemId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl MoodboardItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: MoodboardItemId::new(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
