//! Storage backend selection
//!
//! Wraps the available blob stores in one type so the backend can be chosen
//! from configuration at startup.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::application::ports::outbound::{BlobStorePort, StorageError};
use crate::infrastructure::config::StorageBackend;
use crate::infrastructure::persistence::{InMemoryBlobStore, SqliteBlobStore};

/// Enum wrapper for blob store backends to enable runtime selection
#[derive(Clone)]
pub enum BlobStoreBackend {
    Memory(InMemoryBlobStore),
    Sqlite(SqliteBlobStore),
}

impl BlobStoreBackend {
    /// Open the configured backend, creating the SQLite file if needed
    pub async fn open(config: &StorageBackend) -> Result<Self> {
        match config {
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                Ok(Self::Memory(InMemoryBlobStore::new()))
            }
            StorageBackend::Sqlite { path } => {
                if let Some(parent) = Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).with_context(|| {
                            format!("Failed to create data directory {}", parent.display())
                        })?;
                    }
                }

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                let pool = SqlitePoolOptions::new()
                    .connect_with(options)
                    .await
                    .with_context(|| format!("Failed to open SQLite database at {}", path))?;
                let store = SqliteBlobStore::new(pool)
                    .await
                    .context("Failed to prepare SQLite schema")?;

                info!("Using SQLite storage at {}", path);
                Ok(Self::Sqlite(store))
            }
        }
    }
}

#[async_trait]
impl BlobStorePort for BlobStoreBackend {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BlobStoreBackend::Memory(store) => store.load(key).await,
            BlobStoreBackend::Sqlite(store) => store.load(key).await,
        }
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BlobStoreBackend::Memory(store) => store.store(key, value).await,
            BlobStoreBackend::Sqlite(store) => store.store(key, value).await,
        }
    }
}
