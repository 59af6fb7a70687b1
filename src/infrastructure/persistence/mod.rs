//! Persistence - blob stores and the room/moodboard gateway

mod backend;
mod memory_store;
mod sanctuary_store;
mod sqlite_store;

pub use backend::BlobStoreBackend;
pub use memory_store::InMemoryBlobStore;
#[allow(unused_imports)]
pub use sanctuary_store::{SanctuaryStore, MOODBOARD_KEY, ROOMS_KEY};
pub use sqlite_store::SqliteBlobStore;
