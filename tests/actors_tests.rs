mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_actor_round_trip() {
    let app = spawn_app().await;

    let payload = json!({
        "first_name": "Leonardo",
        "last_name": "DiCaprio",
        "age": 49,
        "image_url": "https://example.com/leo.jpg"
    });
    let (status, created) = post(&app, "/api/v1/actors/", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/v1/actors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["first_name", "last_name", "age", "image_url"] {
        assert_eq!(fetched[field], payload[field], "{field}");
    }
    assert_eq!(fetched["movies"], json!([]));
}

#[tokio::test]
async fn test_update_actor_full_replace() {
    let app = spawn_app().await;
    let id = create_actor(&app, "Leonardo", "DiCaprio").await;

    let (status, updated) = put(
        &app,
        &format!("/api/v1/actors/{id}"),
        json!({ "first_name": "Tom", "last_name": "Hardy", "age": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Tom");
    assert_eq!(updated["last_name"], "Hardy");
    assert!(updated["age"].is_null());
    assert!(updated["image_url"].is_null());

    let (_, fetched) = get(&app, &format!("/api/v1/actors/{id}")).await;
    assert!(fetched["age"].is_null());

    let (status, _) = put(
        &app,
        "/api/v1/actors/999",
        json!({ "first_name": "Tom", "last_name": "Hardy" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actor_validation() {
    let app = spawn_app().await;

    for payload in [
        json!({ "first_name": "L", "last_name": "DiCaprio" }),
        json!({ "first_name": "Leonardo", "last_name": "D".repeat(51) }),
        json!({ "first_name": "Leonardo", "last_name": "DiCaprio", "age": 0 }),
        json!({ "first_name": "Leonardo", "last_name": "DiCaprio", "age": 121 }),
    ] {
        let (status, _) = post(&app, "/api/v1/actors/", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let (_, list) = get(&app, "/api/v1/actors/").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_actor() {
    let app = spawn_app().await;
    let director = create_director(&app, "Christopher", "Nolan").await;
    let movie = create_movie(&app, "Inception", 2010, director).await;
    let id = create_actor(&app, "Leonardo", "DiCaprio").await;
    put_empty(&app, &format!("/api/v1/movies/{movie}/actors/{id}")).await;

    let (status, _) = delete(&app, &format!("/api/v1/actors/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/actors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], format!("Actor with id {id} not found"));

    let (status, detail) = get(&app, &format!("/api/v1/movies/{movie}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["actors"], json!([]));

    let (status, _) = delete(&app, &format!("/api/v1/actors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_actors() {
    let app = spawn_app().await;
    let director = create_director(&app, "Christopher", "Nolan").await;
    let inception = create_movie(&app, "Inception", 2010, director).await;
    let shutter = create_movie(&app, "Shutter Island", 2010, director).await;
    let scifi = create_genre(&app, "Sci-Fi").await;
    let drama = create_genre(&app, "Drama").await;

    let leo = create_actor(&app, "Leonardo", "DiCaprio").await;
    let tom = create_actor(&app, "Tom", "Hardy").await;
    let mark = create_actor(&app, "Mark", "Ruffalo").await;

    put_empty(&app, &format!("/api/v1/movies/{inception}/genres/{scifi}")).await;
    put_empty(&app, &format!("/api/v1/movies/{shutter}/genres/{drama}")).await;
    for (movie, actor) in [(inception, leo), (inception, tom), (shutter, leo), (shutter, mark)] {
        put_empty(&app, &format!("/api/v1/movies/{movie}/actors/{actor}")).await;
    }

    let (_, body) = get(&app, "/api/v1/actors/?name=leo").await;
    assert_eq!(ids(&body), vec![leo]);

    let (_, body) = get(&app, "/api/v1/actors/?name=HARDY").await;
    assert_eq!(ids(&body), vec![tom]);

    let (_, body) = get(&app, "/api/v1/actors/?movie=shutter").await;
    assert_eq!(ids(&body), vec![leo, mark]);

    let (_, body) = get(&app, "/api/v1/actors/?genre=Sci-Fi").await;
    assert_eq!(ids(&body), vec![leo, tom]);

    let (_, body) = get(&app, "/api/v1/actors/?genre=Drama&name=ruff").await;
    assert_eq!(ids(&body), vec![mark]);

    let (_, body) = get(&app, "/api/v1/actors/?movie=Inception&genre=Drama").await;
    assert_eq!(ids(&body), Vec::<i64>::new());

    let (_, body) = get(&app, "/api/v1/actors/").await;
    assert_eq!(ids(&body), vec![leo, tom, mark]);
    assert_eq!(body[0]["movies"].as_array().unwrap().len(), 2);
    assert!(body[0]["movies"][0].get("reviews").is_none(), "nested movies are summaries");
}
