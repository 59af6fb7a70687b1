//! HTTP REST API routes

mod conversion_routes;
mod moodboard_routes;
mod room_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Room routes
        .route(
            "/api/rooms",
            get(room_routes::list_rooms).post(room_routes::create_room),
        )
        .route(
            "/api/rooms/{id}",
            get(room_routes::get_room).delete(room_routes::delete_room),
        )
        .route("/api/rooms/{id}/name", put(room_routes::rename_room))
        .route(
            "/api/rooms/{id}/name/suggestion",
            post(room_routes::suggest_room_name),
        )
        .route("/api/rooms/{id}/mission", post(room_routes::generate_mission))
        .route("/api/rooms/{id}/objects", post(room_routes::add_object))
        .route(
            "/api/rooms/{id}/objects/{index}",
            delete(room_routes::remove_object),
        )
        // Conversion preview
        .route("/api/emoji", post(conversion_routes::convert_to_emoji))
        // Moodboard routes
        .route(
            "/api/moodboard",
            get(moodboard_routes::list_items).post(moodboard_routes::add_item),
        )
        .route("/api/moodboard/{id}", delete(moodboard_routes::delete_item))
}
