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
    models::{ActorFilter, PersonDetail, PersonPayload, PersonSummary},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/actors", get(list).post(create))
        .route("/actors/", get(list).post(create))
        .route("/actors/{id}", get(show).put(update).delete(destroy))
}

async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<ActorFilter>,
) -> AppResult<Json<Vec<PersonDetail>>> {
    Ok(Json(state.actors.list(&filter).await?))
}

async fn show(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<PersonDetail>> {
    Ok(Json(state.actors.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<(StatusCode, Json<PersonSummary>)> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(state.actors.create(payload).await?)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<Json<PersonSummary>> {
    payload.validate()?;
    Ok(Json(state.actors.update(id, payload).await?))
}

async fn destroy(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.actors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
