use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{any, get},
    Router,
};
use shared::api::{Object, API_FALLBACK_PATH};
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod cli;
pub mod db;

mod state;
pub use state::*;

pub mod routes;

pub mod seed;

/// The api routes plus the client assets
///
/// Unmatched `/api/` paths get a json 404. Other paths that don't match an
/// asset get `index.html` so the client router can resolve them
pub fn router(state: AppState) -> Router {
    let assets_dir = &state.args.assets_dir;
    let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .route(Object::Collections.path(), get(routes::fetch_unnamed_collection))
        .route(Object::Collection.path(), get(routes::fetch_collection))
        .route(Object::AdminConfig.path(), get(routes::admin_config))
        .route(Object::Ping.path(), get(routes::ping))
        .route(API_FALLBACK_PATH, any(routes::api_not_found))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
