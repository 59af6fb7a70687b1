//! Value objects - Immutable domain concepts

mod credential;
mod ids;

pub use credential::ApiCredential;
pub use ids::{MoodboardItemId, RoomId};
