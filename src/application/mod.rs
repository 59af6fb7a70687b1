//! Application layer - Use cases and ports
//!
//! This layer contains:
//! - Services: emoji/name/mission conversion and the room/moodboard use cases
//! - Ports: interfaces for the LLM backend, storage and randomness
//! - DTOs: response shapes for the HTTP API

pub mod dto;
pub mod ports;
pub mod services;
