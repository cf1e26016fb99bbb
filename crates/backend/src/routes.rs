use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::u001_generate_table::GENERATE_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения
///
/// Anything that is not an API route falls through to the built frontend.
pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(GENERATE_PATH, post(handlers::u001_generate_table::generate))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
