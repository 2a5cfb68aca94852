use axum::{
    routing::{delete, get},
    Router,
};
use crate::handlers::product::{
    list_products, create_product, delete_product, get_stats, get_chart
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", delete(delete_product))
        .route("/api/stats", get(get_stats))
        .route("/api/chart", get(get_chart))
}
