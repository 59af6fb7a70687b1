//! Storage ports - Interfaces for room and moodboard persistence
//!
//! Persistence is a key-value store of JSON blobs. The blob port is the raw
//! backend; the repository ports are the gateway contracts the application
//! services depend on.

use async_trait::async_trait;

use crate::domain::entities::{MoodboardItem, Room};
use crate::domain::value_objects::{MoodboardItemId, RoomId};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Raw keyed blob storage
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Read the blob stored under `key`
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Repository port for rooms
#[async_trait]
pub trait RoomRepositoryPort: Send + Sync {
    /// All rooms in insertion order
    async fn list(&self) -> Result<Vec<Room>, StorageError>;

    /// Get a room by ID
    async fn get(&self, id: &RoomId) -> Result<Option<Room>, StorageError>;

    /// Replace the room with the same ID, or append it
    async fn upsert(&self, room: &Room) -> Result<(), StorageError>;

    /// Delete a room; returns whether anything was removed
    async fn delete(&self, id: &RoomId) -> Result<bool, StorageError>;

    /// Create and persist an empty room with a fresh ID
    async fn create(&self, name: Option<&str>) -> Result<Room, StorageError>;
}

/// Repository port for moodboard items
#[async_trait]
pub trait MoodboardRepositoryPort: Send + Sync {
    async fn list(&self) -> Result<Vec<MoodboardItem>, StorageError>;

    async fn add(&self, item: &MoodboardItem) -> Result<(), StorageError>;

    /// Delete an item; returns whether anything was removed
    async fn delete(&self, id: MoodboardItemId) -> Result<bool, StorageError>;
}
