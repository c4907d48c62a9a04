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
    models::{AverageRating, ReviewFilter, ReviewPayload, ReviewResponse},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reviews", get(list).post(create))
        .route("/reviews/", get(list).post(create))
        .route("/reviews/{id}", get(show).put(update).delete(destroy))
        .route("/reviews/movie/{movie_id}/average", get(average))
}

async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<ReviewFilter>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    Ok(Json(state.reviews.list(&filter).await?))
}

async fn show(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ReviewResponse>> {
    Ok(Json(state.reviews.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ReviewPayload>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(state.reviews.create(payload).await?)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<ReviewPayload>,
) -> AppResult<Json<ReviewResponse>> {
    payload.validate()?;
    Ok(Json(state.reviews.update(id, payload).await?))
}

async fn destroy(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn average(
    State(state): State<Arc<AppState>>,
    ApiPath(movie_id): ApiPath<i32>,
) -> AppResult<Json<AverageRating>> {
    Ok(Json(state.reviews.average_for_movie(movie_id).await?))
}
