// src/handlers/schedule.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::content::Content;

/// The upcoming exam calendar. Static rows, same for every session.
pub async fn list_schedule(State(content): State<Arc<Content>>) -> impl IntoResponse {
    Json(content.schedule.clone())
}
