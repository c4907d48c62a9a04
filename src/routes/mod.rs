use std::sync::Arc;

use axum::{Json, Router};
use serde_json::{Value, json};

use crate::AppState;

mod actors;
mod directors;
mod genres;
mod movies;
mod reviews;

pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Hello 👋" }))
}

/// Resource routes, mounted under `/api/v1`.
pub fn api() -> Router<Arc<AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(actors::routes())
        .merge(directors::routes())
        .merge(genres::routes())
        .merge(reviews::routes())
}
