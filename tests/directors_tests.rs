mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_director_crud() {
    let app = spawn_app().await;

    let (status, created) = post(
        &app,
        "/api/v1/directors/",
        json!({ "first_name": "Christopher", "last_name": "Nolan", "age": 54 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("movies").is_none());
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["last_name"], "Nolan");
    assert_eq!(fetched["movies"], json!([]));

    let (status, updated) = put(
        &app,
        &format!("/api/v1/directors/{id}"),
        json!({ "first_name": "Chris", "last_name": "Nolan", "age": 55, "image_url": "https://example.com/n.jpg" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Chris");
    assert_eq!(updated["age"], 55);

    let (status, _) = delete(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], format!("Director with id {id} not found"));
}

#[tokio::test]
async fn test_director_not_found() {
    let app = spawn_app().await;

    let (status, _) = get(&app, "/api/v1/directors/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = put(
        &app,
        "/api/v1/directors/999",
        json!({ "first_name": "Chris", "last_name": "Nolan" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/v1/directors/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_director_validation() {
    let app = spawn_app().await;

    let (status, _) = post(
        &app,
        "/api/v1/directors/",
        json!({ "first_name": "Christopher", "last_name": "N" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(
        &app,
        "/api/v1/directors/",
        json!({ "first_name": "Christopher", "last_name": "Nolan", "age": 200 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get(&app, "/api/v1/directors/").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_director_with_movies_is_refused() {
    let app = spawn_app().await;
    let id = create_director(&app, "Christopher", "Nolan").await;
    let movie = create_movie(&app, "Inception", 2010, id).await;

    let (status, body) = delete(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("still has 1 movie"));

    let (status, _) = get(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    delete(&app, &format!("/api/v1/movies/{movie}")).await;
    let (status, _) = delete(&app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_filter_directors_by_name() {
    let app = spawn_app().await;
    let nolan = create_director(&app, "Christopher", "Nolan").await;
    let villeneuve = create_director(&app, "Denis", "Villeneuve").await;
    let movie = create_movie(&app, "Inception", 2010, nolan).await;

    let (_, body) = get(&app, "/api/v1/directors/?name=nol").await;
    assert_eq!(ids(&body), vec![nolan]);
    assert_eq!(body[0]["movies"][0]["id"], movie);

    let (_, body) = get(&app, "/api/v1/directors/?name=DENIS").await;
    assert_eq!(ids(&body), vec![villeneuve]);

    let (_, body) = get(&app, "/api/v1/directors/?name=zzz").await;
    assert_eq!(body, json!([]));

    let (_, body) = get(&app, "/api/v1/directors").await;
    assert_eq!(ids(&body), vec![nolan, villeneuve]);
}
