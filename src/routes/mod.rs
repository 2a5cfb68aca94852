pub mod pages;
pub mod products;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::handlers::page::not_found;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(pages::routes())
        .merge(products::routes())
        .route("/health", get(health_check))
        .fallback(not_found)
}

/// The full application: routes, middleware and state.
pub fn app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
