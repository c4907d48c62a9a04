use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};
use garde::Validate;

use crate::{
    AppState,
    error::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    models::{MovieDetail, MovieFilter, MoviePayload, MovieSummary},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list).post(create))
        .route("/movies/", get(list).post(create))
        .route("/movies/{id}", get(show).put(update).delete(destroy))
        .route("/movies/{id}/genres/{genre_id}", put(add_genre).delete(remove_genre))
        .route("/movies/{id}/actors/{actor_id}", put(add_actor).delete(remove_actor))
}

async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<MovieFilter>,
) -> AppResult<Json<Vec<MovieDetail>>> {
    Ok(Json(state.movies.list(&filter).await?))
}

async fn show(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MovieDetail>> {
    Ok(Json(state.movies.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<MoviePayload>,
) -> AppResult<(StatusCode, Json<MovieSummary>)> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(state.movies.create(payload).await?)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<MoviePayload>,
) -> AppResult<Json<MovieSummary>> {
    payload.validate()?;
    Ok(Json(state.movies.update(id, payload).await?))
}

async fn destroy(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_genre(
    State(state): State<Arc<AppState>>,
    ApiPath((id, genre_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<MovieDetail>> {
    Ok(Json(state.movies.add_genre(id, genre_id).await?))
}

async fn remove_genre(
    State(state): State<Arc<AppState>>,
    ApiPath((id, genre_id)): ApiPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.movies.remove_genre(id, genre_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_actor(
    State(state): State<Arc<AppState>>,
    ApiPath((id, actor_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<MovieDetail>> {
    Ok(Json(state.movies.add_actor(id, actor_id).await?))
}

async fn remove_actor(
    State(state): State<Arc<AppState>>,
    ApiPath((id, actor_id)): ApiPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.movies.remove_actor(id, actor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
