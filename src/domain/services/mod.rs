//! Domain services - Pure business logic operations

pub mod emoji_tables;

pub use emoji_tables::{
    match_emoji, ABSTRACT_EMOJIS, DEFAULT_MISSION, FALLBACK_MISSIONS, FALLBACK_ROOM_NAMES,
};
