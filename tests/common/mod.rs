#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use movie_explore::{AppState, config::Config, db};
use serde_json::{Value, json};
use tower::ServiceExt;

pub async fn spawn_app() -> Router {
    let db = db::connect_and_migrate("sqlite::memory:", 1).await.expect("in-memory database");
    movie_explore::router(Arc::new(AppState::new(Arc::new(Config::default()), db)))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn put_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "PUT", uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

pub async fn create_director(app: &Router, first_name: &str, last_name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/directors/",
        json!({
            "first_name": first_name,
            "last_name": last_name,
            "age": 54,
            "image_url": "https://example.com/director.jpg"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub async fn create_actor(app: &Router, first_name: &str, last_name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/actors/",
        json!({ "first_name": first_name, "last_name": last_name, "age": 49 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub async fn create_genre(app: &Router, kind: &str) -> i64 {
    let (status, body) = post(app, "/api/v1/genres/", json!({ "type": kind })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub fn movie_body(title: &str, release_year: i64, director_id: i64) -> Value {
    json!({
        "title": title,
        "description": "A mind-bending thriller",
        "release_year": release_year,
        "image_url": "https://example.com/poster.jpg",
        "director_id": director_id,
        "rating": 8.8
    })
}

pub async fn create_movie(app: &Router, title: &str, release_year: i64, director_id: i64) -> i64 {
    let (status, body) =
        post(app, "/api/v1/movies/", movie_body(title, release_year, director_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub async fn create_review(app: &Router, movie_id: i64, rating: f64) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/reviews/",
        json!({
            "movie_id": movie_id,
            "reviewer_name": "John Doe",
            "rating": rating,
            "comment": "Amazing movie!"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array().unwrap().iter().map(|v| v["id"].as_i64().unwrap()).collect()
}
