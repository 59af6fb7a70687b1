//! Room Service - Application service for room management
//!
//! Implements what the room screens do: create, rename and delete rooms,
//! place converted objects in them, and attach AI-suggested names and
//! missions.
//!
//! Conversions run on a snapshot of the room and can take a while. Their
//! result is applied to the freshly loaded room under `edit_lock`, so edits
//! made to the same room in the meantime are kept.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{LlmPort, RoomRepositoryPort, StorageError};
use crate::application::services::ConversionService;
use crate::domain::entities::{Room, RoomObject};
use crate::domain::value_objects::RoomId;

#[derive(Debug, thiserror::Error)]
pub enum RoomServiceError {
    #[error("Room not found: {0}")]
    NotFound(RoomId),
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("Room {room_id} has no object at index {index}")]
    ObjectIndexOutOfRange { room_id: RoomId, index: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type RoomResult<T> = Result<T, RoomServiceError>;

pub struct RoomService<L: LlmPort> {
    rooms: Arc<dyn RoomRepositoryPort>,
    conversion: Arc<ConversionService<L>>,
    edit_lock: Mutex<()>,
}

impl<L: LlmPort> RoomService<L> {
    pub fn new(rooms: Arc<dyn RoomRepositoryPort>, conversion: Arc<ConversionService<L>>) -> Self {
        Self {
            rooms,
            conversion,
            edit_lock: Mutex::new(()),
        }
    }

    pub async fn list_rooms(&self) -> RoomResult<Vec<Room>> {
        Ok(self.rooms.list().await?)
    }

    pub async fn get_room(&self, id: &RoomId) -> RoomResult<Room> {
        self.rooms
            .get(id)
            .await?
            .ok_or_else(|| RoomServiceError::NotFound(id.clone()))
    }

    #[instrument(skip(self))]
    pub async fn create_room(&self, name: Option<&str>) -> RoomResult<Room> {
        let room = self.rooms.create(name).await?;
        info!(room_id = %room.id, "Created room");
        Ok(room)
    }

    /// Rename a room; blank names become "Untitled Room"
    #[instrument(skip(self))]
    pub async fn rename_room(&self, id: &RoomId, name: &str) -> RoomResult<Room> {
        self.edit(id, |room| {
            room.rename(name);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_room(&self, id: &RoomId) -> RoomResult<()> {
        let _guard = self.edit_lock.lock().await;
        if !self.rooms.delete(id).await? {
            return Err(RoomServiceError::NotFound(id.clone()));
        }
        info!(room_id = %id, "Deleted room");
        Ok(())
    }

    /// Convert `text` to emoji and append the result to the room
    #[instrument(skip(self))]
    pub async fn add_object(&self, id: &RoomId, text: &str) -> RoomResult<Room> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RoomServiceError::EmptyText);
        }
        // Fail before spending an API call on a room that is gone
        self.get_room(id).await?;

        let emoji = self.conversion.convert_to_emoji(text).await;
        debug!(%emoji, "Converted object text");

        let object = RoomObject::new(emoji, text);
        self.edit(id, move |room| {
            room.add_object(object);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_object(&self, id: &RoomId, index: usize) -> RoomResult<Room> {
        self.edit(id, |room| {
            room.remove_object(index)
                .map(|_| ())
                .ok_or_else(|| RoomServiceError::ObjectIndexOutOfRange {
                    room_id: room.id.clone(),
                    index,
                })
        })
        .await
    }

    /// Ask for a name fitting the room's objects and save it
    #[instrument(skip(self))]
    pub async fn suggest_name(&self, id: &RoomId) -> RoomResult<Room> {
        let snapshot = self.get_room(id).await?.objects;
        let name = self.conversion.suggest_room_name(&snapshot).await;
        info!(room_id = %id, %name, "Suggested room name");

        self.edit(id, |room| {
            room.rename(&name);
            Ok(())
        })
        .await
    }

    /// Generate a mission for the room's objects and save it
    #[instrument(skip(self))]
    pub async fn generate_mission(&self, id: &RoomId) -> RoomResult<Room> {
        let snapshot = self.get_room(id).await?.objects;
        let mission = self.conversion.generate_mission(&snapshot).await;
        info!(room_id = %id, %mission, "Generated mission");

        self.edit(id, |room| {
            room.set_mission(mission);
            Ok(())
        })
        .await
    }

    /// Load, modify and save one room while holding the edit lock
    async fn edit<F>(&self, id: &RoomId, apply: F) -> RoomResult<Room>
    where
        F: FnOnce(&mut Room) -> RoomResult<()>,
    {
        let _guard = self.edit_lock.lock().await;
        let mut room = self.get_room(id).await?;
        apply(&mut room)?;
        self.rooms.upsert(&room).await?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{LlmError, LlmRequest, LlmResponse};
    use crate::application::services::fallback_resolver::tests::FixedPick;
    use crate::application::services::FallbackResolver;
    use crate::domain::entities::DEFAULT_ROOM_NAME;
    use crate::domain::services::FALLBACK_MISSIONS;
    use crate::domain::value_objects::ApiCredential;
    use crate::infrastructure::persistence::{InMemoryBlobStore, SanctuaryStore};

    /// Never reached: the tests run without a credential
    struct OfflineLlm;

    #[async_trait::async_trait]
    impl LlmPort for OfflineLlm {
        async fn generate(&self, _api_key: &str, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            Err(LlmError::Transport("offline".to_string()))
        }
    }

    fn service(pick: usize) -> RoomService<OfflineLlm> {
        let store = Arc::new(SanctuaryStore::new(InMemoryBlobStore::new()));
        let conversion = ConversionService::new(
            Arc::new(OfflineLlm),
            ApiCredential::Missing,
            FallbackResolver::new(Arc::new(FixedPick(pick))),
        );
        RoomService::new(store, Arc::new(conversion))
    }

    #[tokio::test]
    async fn test_create_room_defaults_name() {
        let service = service(0);
        let room = service.create_room(None).await.unwrap();
        assert_eq!(room.name, DEFAULT_ROOM_NAME);

        let blank = service.create_room(Some("  ")).await.unwrap();
        assert_eq!(blank.name, DEFAULT_ROOM_NAME);
        assert_ne!(room.id, blank.id);
    }

    #[tokio::test]
    async fn test_rename_to_blank_is_normalized_and_saved() {
        let service = service(0);
        let room = service.create_room(Some("서재")).await.unwrap();

        service.rename_room(&room.id, " \t ").await.unwrap();
        let stored = service.get_room(&room.id).await.unwrap();
        assert_eq!(stored.name, DEFAULT_ROOM_NAME);
    }

    #[tokio::test]
    async fn test_add_object_converts_and_appends() {
        let service = service(0);
        let room = service.create_room(None).await.unwrap();

        service.add_object(&room.id, "  복숭아  ").await.unwrap();
        let room = service.add_object(&room.id, "고양이").await.unwrap();

        assert_eq!(room.objects.len(), 2);
        assert_eq!(room.objects[0].emoji, "🍑");
        assert_eq!(room.objects[0].text, "복숭아");
        assert_eq!(room.objects[1].emoji, "✨");
        assert_eq!(service.get_room(&room.id).await.unwrap(), room);
    }

    #[tokio::test]
    async fn test_add_object_rejects_blank_text_and_missing_room() {
        let service = service(0);
        let room = service.create_room(None).await.unwrap();

        assert!(matches!(
            service.add_object(&room.id, "   ").await,
            Err(RoomServiceError::EmptyText)
        ));
        assert!(matches!(
            service.add_object(&RoomId::new("404"), "책").await,
            Err(RoomServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_object() {
        let service = service(0);
        let room = service.create_room(None).await.unwrap();
        service.add_object(&room.id, "케이크").await.unwrap();
        service.add_object(&room.id, "커피").await.unwrap();

        let room = service.remove_object(&room.id, 0).await.unwrap();
        assert_eq!(room.objects.len(), 1);
        assert_eq!(room.objects[0].emoji, "☕");

        assert!(matches!(
            service.remove_object(&room.id, 3).await,
            Err(RoomServiceError::ObjectIndexOutOfRange { index: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_suggest_name_and_mission_are_saved() {
        let service = service(1);
        let room = service.create_room(None).await.unwrap();
        service.add_object(&room.id, "램프").await.unwrap();

        let named = service.suggest_name(&room.id).await.unwrap();
        assert_eq!(named.name, "서재");

        let with_mission = service.generate_mission(&room.id).await.unwrap();
        assert_eq!(with_mission.mission.as_deref(), Some(FALLBACK_MISSIONS[1]));
        assert_eq!(with_mission.name, "서재");
        assert_eq!(with_mission.objects.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_room() {
        let service = service(0);
        let room = service.create_room(None).await.unwrap();

        service.delete_room(&room.id).await.unwrap();
        assert!(matches!(
            service.get_room(&room.id).await,
            Err(RoomServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_room(&room.id).await,
            Err(RoomServiceError::NotFound(_))
        ));
    }
}
