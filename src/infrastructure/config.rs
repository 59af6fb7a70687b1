//! Application configuration

use std::env;

use anyhow::{bail, Context, Result};

use crate::domain::value_objects::ApiCredential;

/// Where rooms and moodboard items are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process memory; lost on restart
    Memory,
    /// SQLite file at the given path
    Sqlite { path: String },
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the chat-completion API
    pub openai_credential: ApiCredential,
    /// Chat-completion API base URL (OpenAI-compatible)
    pub openai_base_url: String,
    /// Model used for all conversions
    pub openai_model: String,

    /// Storage backend for rooms and the moodboard
    pub storage: StorageBackend,

    /// Seed for fallback picks; unset means thread-local randomness
    pub random_seed: Option<u64>,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let storage = match env::var("SANCTUARY_STORAGE")
            .unwrap_or_else(|_| "sqlite".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StorageBackend::Memory,
            "sqlite" => StorageBackend::Sqlite {
                path: env::var("SANCTUARY_SQLITE_PATH")
                    .unwrap_or_else(|_| "./data/sanctuary.db".to_string()),
            },
            other => bail!("SANCTUARY_STORAGE must be `memory` or `sqlite`, got `{}`", other),
        };

        let random_seed = match env::var("SANCTUARY_RANDOM_SEED") {
            Ok(seed) => Some(
                seed.parse()
                    .context("SANCTUARY_RANDOM_SEED must be an unsigned integer")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            openai_credential: ApiCredential::from_optional(env::var("OPENAI_API_KEY").ok()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),

            storage,
            random_seed,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }

    /// In-memory storage, no API key
    #[cfg(test)]
    pub fn offline() -> Self {
        Self {
            openai_credential: ApiCredential::Missing,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            storage: StorageBackend::Memory,
            random_seed: Some(0),
            server_port: 3000,
        }
    }
}
