//! SQLite blob store

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{BlobStorePort, StorageError};

/// Blob store backed by a single SQLite key-value table
#[derive(Clone)]
pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(r#"
            CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl BlobStorePort for SqliteBlobStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM blobs WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(row.map(|(value,)| value))
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> SqliteBlobStore {
        // One connection, otherwise each one gets its own in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteBlobStore::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_key() {
        let store = store().await;
        assert_eq!(store.load("sanctuary_rooms").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_replaces_value() {
        let store = store().await;
        store.store("sanctuary_rooms", "[]").await.unwrap();
        store.store("sanctuary_rooms", r#"[{"id":"1"}]"#).await.unwrap();
        store.store("sanctuary_moodboard", "[]").await.unwrap();

        assert_eq!(
            store.load("sanctuary_rooms").await.unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
        assert_eq!(store.load("sanctuary_moodboard").await.unwrap().as_deref(), Some("[]"));
    }
}
