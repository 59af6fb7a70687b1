//! Room entity
//!
//! A room is a named, ordered collection of emoji objects. Object order is
//! insertion order and doubles as display order; objects have no identity
//! beyond their position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RoomId;

/// Name given to rooms that have none
pub const DEFAULT_ROOM_NAME: &str = "Untitled Room";

/// Trim a user- or AI-supplied room name, falling back to the default
/// when nothing is left.
pub fn normalize_room_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_ROOM_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A virtual personal space holding emoji objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub objects: Vec<RoomObject>,
    /// Reflective suggestion attached to the room, if one was generated
    #[serde(default)]
    pub mission: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(id: RoomId, name: Option<&str>) -> Self {
        Self {
            id,
            name: normalize_room_name(name.unwrap_or_default()),
            objects: Vec::new(),
            mission: None,
            created_at: Utc::now(),
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.name = normalize_room_name(name);
    }

    pub fn add_object(&mut self, object: RoomObject) {
        self.objects.push(object);
    }

    /// Remove the object at `index`, shifting later objects down
    pub fn remove_object(&mut self, index: usize) -> Option<RoomObject> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    pub fn set_mission(&mut self, mission: impl Into<String>) {
        self.mission = Some(mission.into());
    }

    /// The first `limit` emoji, as shown on a room card
    pub fn preview(&self, limit: usize) -> Vec<String> {
        self.objects
            .iter()
            .take(limit)
            .map(|object| object.emoji.clone())
            .collect()
    }
}

/// One emoji placed in a room, together with the text it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomObject {
    pub emoji: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl RoomObject {
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_without_name_is_untitled() {
        let room = Room::new(RoomId::new("1"), None);
        assert_eq!(room.name, DEFAULT_ROOM_NAME);
        assert!(room.objects.is_empty());
        assert!(room.mission.is_none());
    }

    #[test]
    fn test_rename_normalizes_blank_names() {
        let mut room = Room::new(RoomId::new("1"), Some("별빛 서재"));
        assert_eq!(room.name, "별빛 서재");

        room.rename("   ");
        assert_eq!(room.name, DEFAULT_ROOM_NAME);

        room.rename("  따뜻한 온실 ");
        assert_eq!(room.name, "따뜻한 온실");
    }

    #[test]
    fn test_remove_object_keeps_order() {
        let mut room = Room::new(RoomId::new("1"), None);
        room.add_object(RoomObject::new("🍑", "복숭아"));
        room.add_object(RoomObject::new("🍰", "케이크"));
        room.add_object(RoomObject::new("📖", "책"));

        let removed = room.remove_object(1).unwrap();
        assert_eq!(removed.emoji, "🍰");
        let emojis: Vec<_> = room.objects.iter().map(|o| o.emoji.as_str()).collect();
        assert_eq!(emojis, vec!["🍑", "📖"]);

        assert!(room.remove_object(5).is_none());
    }

    #[test]
    fn test_preview_is_limited() {
        let mut room = Room::new(RoomId::new("1"), None);
        for _ in 0..8 {
            room.add_object(RoomObject::new("✨", "sparkle"));
        }
        assert_eq!(room.preview(6).len(), 6);
    }

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let mut room = Room::new(RoomId::new("1700000000000"), None);
        room.add_object(RoomObject::new("🍵", "녹차"));
        let value = serde_json::to_value(&room).unwrap();

        assert_eq!(value["id"], "1700000000000");
        assert!(value.get("createdAt").is_some());
        assert!(value["objects"][0].get("createdAt").is_some());
        assert_eq!(value["mission"], serde_json::Value::Null);
    }

    #[test]
    fn test_deserializes_record_without_mission() {
        let json = r#"{
            "id": "1700000000000",
            "name": "Untitled Room",
            "objects": [{"emoji": "🍑", "text": "복숭아", "createdAt": "2024-01-01T00:00:00.000Z"}],
            "createdAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.objects.len(), 1);
        assert!(room.mission.is_none());
    }
}
