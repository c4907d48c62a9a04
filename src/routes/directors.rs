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
    extract::{ApiJson, ApiPath, ApiQuery},
    models::{DirectorFilter, PersonDetail, PersonPayload, PersonSummary},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/directors", get(list).post(create))
        .route("/directors/", get(list).post(create))
        .route("/directors/{id}", get(show).put(update).delete(destroy))
}

async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<DirectorFilter>,
) -> AppResult<Json<Vec<PersonDetail>>> {
    Ok(Json(state.directors.list(&filter).await?))
}

async fn show(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<PersonDetail>> {
    Ok(Json(state.directors.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<(StatusCode, Json<PersonSummary>)> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(state.directors.create(payload).await?)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<Json<PersonSummary>> {
    payload.validate()?;
    Ok(Json(state.directors.update(id, payload).await?))
}

async fn destroy(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.directors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
