//! Moodboard Service - free-floating text notes
//!
//! Moodboard items never go through the conversion service; they are stored
//! as typed.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::outbound::{MoodboardRepositoryPort, StorageError};
use crate::domain::entities::MoodboardItem;
use crate::domain::value_objects::MoodboardItemId;

#[derive(Debug, thiserror::Error)]
pub enum MoodboardError {
    #[error("Moodboard item not found: {0}")]
    NotFound(MoodboardItemId),
    #[error("Text cannot be empty")]
    EmptyText,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct MoodboardService {
    items: Arc<dyn MoodboardRepositoryPort>,
}

impl MoodboardService {
    pub fn new(items: Arc<dyn MoodboardRepositoryPort>) -> Self {
        Self { items }
    }

    pub async fn list_items(&self) -> Result<Vec<MoodboardItem>, MoodboardError> {
        Ok(self.items.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, text: &str) -> Result<MoodboardItem, MoodboardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoodboardError::EmptyText);
        }

        let item = MoodboardItem::new(text);
        self.items.add(&item).await?;
        info!(item_id = %item.id, "Added moodboard item");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: MoodboardItemId) -> Result<(), MoodboardError> {
        if !self.items.delete(id).await? {
            return Err(MoodboardError::NotFound(id));
        }
        Ok(())
    }
}
