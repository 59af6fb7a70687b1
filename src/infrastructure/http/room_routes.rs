//! Room API routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    CreateRoomRequestDto, RenameRoomRequestDto, RoomSummaryDto, TextRequestDto,
};
use crate::application::services::RoomServiceError;
use crate::domain::entities::Room;
use crate::domain::value_objects::RoomId;
use crate::infrastructure::state::AppState;

fn error_response(e: RoomServiceError) -> (StatusCode, String) {
    let status = match &e {
        RoomServiceError::NotFound(_) | RoomServiceError::ObjectIndexOutOfRange { .. } => {
            StatusCode::NOT_FOUND
        }
        RoomServiceError::EmptyText => StatusCode::BAD_REQUEST,
        RoomServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// List all rooms as cards
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoomSummaryDto>>, (StatusCode, String)> {
    let rooms = state.room_service.list_rooms().await.map_err(error_response)?;
    Ok(Json(rooms.into_iter().map(RoomSummaryDto::from).collect()))
}

/// Create a new room
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Room>), (StatusCode, String)> {
    // An empty body creates an untitled room
    let req: CreateRoomRequestDto = if body.is_empty() {
        CreateRoomRequestDto::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)))?
    };
    let room = state
        .room_service
        .create_room(req.name.as_deref())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Get a room with all its objects
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Room>, (StatusCode, String)> {
    state
        .room_service
        .get_room(&RoomId::from(id))
        .await
        .map(Json)
        .map_err(error_response)
}

/// Delete a room
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .room_service
        .delete_room(&RoomId::from(id))
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Rename a room
pub async fn rename_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RenameRoomRequestDto>,
) -> Result<Json<Room>, (StatusCode, String)> {
    state
        .room_service
        .rename_room(&RoomId::from(id), &req.name)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Replace the room name with an AI suggestion
pub async fn suggest_room_name(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Room>, (StatusCode, String)> {
    state
        .room_service
        .suggest_name(&RoomId::from(id))
        .await
        .map(Json)
        .map_err(error_response)
}

/// Generate and attach a mission
pub async fn generate_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Room>, (StatusCode, String)> {
    state
        .room_service
        .generate_mission(&RoomId::from(id))
        .await
        .map(Json)
        .map_err(error_response)
}

/// Convert text to emoji and place it in the room
pub async fn add_object(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<TextRequestDto>,
) -> Result<(StatusCode, Json<Room>), (StatusCode, String)> {
    let room = state
        .room_service
        .add_object(&RoomId::from(id), &req.text)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Remove the object at a position
pub async fn remove_object(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<Room>, (StatusCode, String)> {
    state
        .room_service
        .remove_object(&RoomId::from(id), index)
        .await
        .map(Json)
        .map_err(error_response)
}
