//! Domain entities

mod moodboard;
mod room;

pub use moodboard::MoodboardItem;
pub use room::{normalize_room_name, Room, RoomObject, DEFAULT_ROOM_NAME};
