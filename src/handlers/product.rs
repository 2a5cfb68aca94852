// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{CreateProductRequest, ProductCard, SearchQuery};
use crate::dtos::stats::{ChartResponse, StatsResponse};
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

// GET /api/products - Cards for the current search (all when absent)
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductCard>>, AppError> {
    let mut inventory = state.inventory()?;
    inventory.filter(query.search.as_deref().unwrap_or(""));
    Ok(Json(inventory.view().cards().to_vec()))
}

// POST /api/products - Register a product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let mut inventory = state.inventory()?;
    let product = inventory.add_product(payload)?.clone();
    Ok((StatusCode::CREATED, Json(product)))
}

// DELETE /api/products/{id} - Remove a product; unknown ids are fine
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.inventory()?.delete_product(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/stats - Stock and profit totals
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.inventory()?.compute_aggregates();
    Ok(Json(StatsResponse::new(stats, &state.currency)))
}

// GET /api/chart - Profit percentage per product
#[instrument(skip(state))]
pub async fn get_chart(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let series = state.inventory()?.chart_series();
    Ok(Json(ChartResponse::from(series)))
}
