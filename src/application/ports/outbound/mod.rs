//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod random_port;
mod storage_port;

pub use llm_port::{ChatMessage, LlmError, LlmPort, LlmRequest, LlmResponse, ResponseFormat};
pub use random_port::RandomPort;
pub use storage_port::{BlobStorePort, MoodboardRepositoryPort, RoomRepositoryPort, StorageError};
