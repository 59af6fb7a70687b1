//! Moodboard API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::TextRequestDto;
use crate::application::services::MoodboardError;
use crate::domain::entities::MoodboardItem;
use crate::domain::value_objects::MoodboardItemId;
use crate::infrastructure::state::AppState;

fn error_response(e: MoodboardError) -> (StatusCode, String) {
    let status = match &e {
        MoodboardError::NotFound(_) => StatusCode::NOT_FOUND,
        MoodboardError::EmptyText => StatusCode::BAD_REQUEST,
        MoodboardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// List moodboard items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MoodboardItem>>, (StatusCode, String)> {
    state
        .moodboard_service
        .list_items()
        .await
        .map(Json)
        .map_err(error_response)
}

/// Add a moodboard item
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequestDto>,
) -> Result<(StatusCode, Json<MoodboardItem>), (StatusCode, String)> {
    let item = state
        .moodboard_service
        .add_item(&req.text)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete a moodboard item
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid moodboard item ID".to_string()))?;

    state
        .moodboard_service
        .delete_item(MoodboardItemId::from_uuid(uuid))
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
