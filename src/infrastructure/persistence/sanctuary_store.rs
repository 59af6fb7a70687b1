//! Room/Storage Gateway
//!
//! Keeps all rooms in one JSON blob and all moodboard items in another, the
//! same layout the browser client used in local storage. Every mutation is a
//! read-modify-write of a whole blob, serialized by `write_lock`.

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ports::outbound::{
    BlobStorePort, MoodboardRepositoryPort, RoomRepositoryPort, StorageError,
};
use crate::domain::entities::{normalize_room_name, MoodboardItem, Room};
use crate::domain::value_objects::{MoodboardItemId, RoomId};

pub const ROOMS_KEY: &str = "sanctuary_rooms";
pub const MOODBOARD_KEY: &str = "sanctuary_moodboard";

/// Room and moodboard repository over a blob store
pub struct SanctuaryStore<B: BlobStorePort> {
    blobs: B,
    write_lock: Mutex<()>,
}

impl<B: BlobStorePort> SanctuaryStore<B> {
    pub fn new(blobs: B) -> Self {
        Self {
            blobs,
            write_lock: Mutex::new(()),
        }
    }

    /// Read a list blob; an absent key is an empty list
    async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match self.blobs.load(key).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_list<T: Serialize + Sync>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        self.blobs.store(key, &json).await
    }
}

#[async_trait]
impl<B: BlobStorePort> RoomRepositoryPort for SanctuaryStore<B> {
    async fn list(&self) -> Result<Vec<Room>, StorageError> {
        self.read_list(ROOMS_KEY).await
    }

    async fn get(&self, id: &RoomId) -> Result<Option<Room>, StorageError> {
        let rooms: Vec<Room> = self.read_list(ROOMS_KEY).await?;
        Ok(rooms.into_iter().find(|room| &room.id == id))
    }

    async fn upsert(&self, room: &Room) -> Result<(), StorageError> {
        let mut room = room.clone();
        room.name = normalize_room_name(&room.name);

        let _guard = self.write_lock.lock().await;
        let mut rooms: Vec<Room> = self.read_list(ROOMS_KEY).await?;

        match rooms.iter_mut().find(|existing| existing.id == room.id) {
            Some(existing) => *existing = room,
            None => rooms.push(room),
        }

        self.write_list(ROOMS_KEY, &rooms).await
    }

    async fn delete(&self, id: &RoomId) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut rooms: Vec<Room> = self.read_list(ROOMS_KEY).await?;

        let before = rooms.len();
        rooms.retain(|room| &room.id != id);
        if rooms.len() == before {
            return Ok(false);
        }

        self.write_list(ROOMS_KEY, &rooms).await?;
        Ok(true)
    }

    async fn create(&self, name: Option<&str>) -> Result<Room, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut rooms: Vec<Room> = self.read_list(ROOMS_KEY).await?;

        let mut id = RoomId::from_timestamp(Utc::now());
        while rooms.iter().any(|room| room.id == id) {
            id = id.next();
        }
        debug!(room_id = %id, "Allocated room id");

        let room = Room::new(id, name);
        rooms.push(room.clone());
        self.write_list(ROOMS_KEY, &rooms).await?;
        Ok(room)
    }
}

#[async_trait]
impl<B: BlobStorePort> MoodboardRepositoryPort for SanctuaryStore<B> {
    async fn list(&self) -> Result<Vec<MoodboardItem>, StorageError> {
        self.read_list(MOODBOARD_KEY).await
    }

    async fn add(&self, item: &MoodboardItem) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<MoodboardItem> = self.read_list(MOODBOARD_KEY).await?;
        items.push(item.clone());
        self.write_list(MOODBOARD_KEY, &items).await
    }

    async fn delete(&self, id: MoodboardItemId) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<MoodboardItem> = self.read_list(MOODBOARD_KEY).await?;

        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }

        self.write_list(MOODBOARD_KEY, &items).await?;
        Ok(true)
    }
}
