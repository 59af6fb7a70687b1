//! Application services - Use case implementations
//!
//! Services accept port implementations as dependencies and return domain
//! entities. The conversion service owns every call to the text-generation
//! API; the room and moodboard services implement what the screens do.

pub mod conversion_service;
pub mod fallback_resolver;
pub mod moodboard_service;
pub mod room_service;

#[allow(unused_imports)]
pub use conversion_service::{Completion, ConversionError, ConversionService};
pub use fallback_resolver::FallbackResolver;
pub use moodboard_service::{MoodboardError, MoodboardService};
pub use room_service::{RoomService, RoomServiceError};
