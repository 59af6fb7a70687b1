//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::RandomPort;
use crate::application::services::{
    ConversionService, FallbackResolver, MoodboardService, RoomService,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::persistence::{BlobStoreBackend, SanctuaryStore};
use crate::infrastructure::randomness::{SeededRandom, ThreadRandom};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub conversion_service: Arc<ConversionService<OpenAiClient>>,
    pub room_service: RoomService<OpenAiClient>,
    pub moodboard_service: MoodboardService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let backend = BlobStoreBackend::open(&config.storage).await?;
        Ok(Self::with_backend(config, backend))
    }

    /// Wire services over an already opened storage backend
    pub fn with_backend(config: AppConfig, backend: BlobStoreBackend) -> Self {
        let store = Arc::new(SanctuaryStore::new(backend));

        let random: Arc<dyn RandomPort> = match config.random_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };

        // Initialize chat-completion client
        let llm_client = Arc::new(OpenAiClient::new(
            &config.openai_base_url,
            &config.openai_model,
        ));

        // Initialize application services
        let conversion_service = Arc::new(ConversionService::new(
            llm_client,
            config.openai_credential.clone(),
            FallbackResolver::new(random),
        ));
        let room_service = RoomService::new(store.clone(), conversion_service.clone());
        let moodboard_service = MoodboardService::new(store);

        Self {
            config,
            conversion_service,
            room_service,
            moodboard_service,
        }
    }
}
