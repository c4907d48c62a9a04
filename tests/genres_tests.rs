mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_genre_crud() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/v1/genres/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = post(&app, "/api/v1/genres/", json!({ "type": "Sci-Fi" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "Sci-Fi");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json!({ "id": id, "type": "Sci-Fi" }));

    let (status, updated) =
        put(&app, &format!("/api/v1/genres/{id}"), json!({ "type": "Science Fiction" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["type"], "Science Fiction");

    let (status, _) = delete(&app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], format!("Genre with id {id} not found"));
}

#[tokio::test]
async fn test_create_genre_duplicate() {
    let app = spawn_app().await;
    create_genre(&app, "Drama").await;

    let (status, body) = post(&app, "/api/v1/genres/", json!({ "type": "Drama" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Genre 'Drama' already exists");

    let (_, list) = get(&app, "/api/v1/genres/").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_genre_validation() {
    let app = spawn_app().await;

    let (status, _) = post(&app, "/api/v1/genres/", json!({ "type": "D" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(&app, "/api/v1/genres/", json!({ "type": "x".repeat(31) })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get(&app, "/api/v1/genres/").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_genre_not_found() {
    let app = spawn_app().await;

    let (status, _) = put(&app, "/api/v1/genres/999", json!({ "type": "Drama" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/v1/genres/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_genre_unlinks_movies() {
    let app = spawn_app().await;
    let director = create_director(&app, "Christopher", "Nolan").await;
    let movie = create_movie(&app, "Inception", 2010, director).await;
    let genre = create_genre(&app, "Sci-Fi").await;
    put_empty(&app, &format!("/api/v1/movies/{movie}/genres/{genre}")).await;

    let (status, _) = delete(&app, &format!("/api/v1/genres/{genre}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, detail) = get(&app, &format!("/api/v1/movies/{movie}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["genres"], json!([]));
}
