use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use garde::Validate;

use crate::{
    AppState,
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::{GenrePayload, GenreResponse},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/genres", get(list).post(create))
        .route("/genres/", get(list).post(create))
        .route("/genres/{id}", get(show).put(update).delete(destroy))
}

async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreResponse>>> {
    Ok(Json(state.genres.list().await?))
}

async fn show(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<GenreResponse>> {
    Ok(Json(state.genres.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<GenrePayload>,
) -> AppResult<(StatusCode, Json<GenreResponse>)> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(state.genres.create(payload).await?)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<GenrePayload>,
) -> AppResult<Json<GenreResponse>> {
    payload.validate()?;
    Ok(Json(state.genres.update(id, payload).await?))
}

async fn destroy(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
