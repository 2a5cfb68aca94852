use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::page::{show_inventory, submit_product, remove_product};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_inventory))
        .route("/products/new", post(submit_product))
        .route("/products/{id}/delete", post(remove_product))
}
