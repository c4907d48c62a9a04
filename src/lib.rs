pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    services::{ActorService, DirectorService, GenreService, MovieService, ReviewService},
};

pub struct AppState {
    pub config: Arc<Config>,
    pub movies: MovieService,
    pub actors: ActorService,
    pub directors: DirectorService,
    pub genres: GenreService,
    pub reviews: ReviewService,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DatabaseConnection) -> Self {
        Self {
            config,
            movies: MovieService::new(db.clone()),
            actors: ActorService::new(db.clone()),
            directors: DirectorService::new(db.clone()),
            genres: GenreService::new(db.clone()),
            reviews: ReviewService::new(db),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(routes::index))
        .nest("/api/v1", routes::api())
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
