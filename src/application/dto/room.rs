//! Room DTOs - request and response shapes for the room API

use serde::{Deserialize, Serialize};

use crate::domain::entities::Room;

/// Emoji shown on a room card
pub const ROOM_PREVIEW_LIMIT: usize = 6;

#[derive(Debug, Default, Deserialize)]
pub struct CreateRoomRequestDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameRoomRequestDto {
    pub name: String,
}

/// Free text to convert or store
#[derive(Debug, Deserialize)]
pub struct TextRequestDto {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmojiResponseDto {
    pub text: String,
    pub emoji: String,
}

/// Room card for the rooms list
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub name: String,
    pub preview: Vec<String>,
    pub object_count: usize,
    pub mission: Option<String>,
    pub created_at: String,
}

impl From<Room> for RoomSummaryDto {
    fn from(room: Room) -> Self {
        Self {
            preview: room.preview(ROOM_PREVIEW_LIMIT),
            object_count: room.objects.len(),
            id: room.id.to_string(),
            name: room.name,
            mission: room.mission,
            created_at: room.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RoomObject;
    use crate::domain::value_objects::RoomId;

    #[test]
    fn test_summary_previews_first_six() {
        let mut room = Room::new(RoomId::new("7"), Some("별빛 서재"));
        for emoji in ["🍑", "🍰", "💡", "📖", "🍵", "☕", "🍞"] {
            room.add_object(RoomObject::new(emoji, "x"));
        }

        let summary = RoomSummaryDto::from(room);
        assert_eq!(summary.object_count, 7);
        assert_eq!(summary.preview, vec!["🍑", "🍰", "💡", "📖", "🍵", "☕"]);
        assert_eq!(summary.name, "별빛 서재");
    }
}
