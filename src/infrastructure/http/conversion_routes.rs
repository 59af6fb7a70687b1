//! Conversion API routes - emoji preview without touching any room

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{EmojiResponseDto, TextRequestDto};
use crate::infrastructure::state::AppState;

/// Convert text to emoji
pub async fn convert_to_emoji(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequestDto>,
) -> Result<Json<EmojiResponseDto>, (StatusCode, String)> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Text cannot be empty".to_string()));
    }

    let emoji = state.conversion_service.convert_to_emoji(text).await;
    Ok(Json(EmojiResponseDto {
        text: text.to_string(),
        emoji,
    }))
}
