//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Room, RoomObject, MoodboardItem
//! - Value Objects: identifiers and the API credential
//! - Domain Services: the local emoji tables used as fallback

pub mod entities;
pub mod services;
pub mod value_objects;
