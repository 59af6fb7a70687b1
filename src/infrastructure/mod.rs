//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: blob stores (memory, SQLite) and the room/moodboard gateway
//! - HTTP: REST API routes
//! - OpenAI: chat-completion client used for conversions
//! - Randomness: sources for fallback picks
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod openai;
pub mod persistence;
pub mod randomness;
pub mod state;
