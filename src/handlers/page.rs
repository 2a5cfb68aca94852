// src/handlers/page.rs
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use crate::dtos::product::{CreateProductRequest, SearchQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::view::page::render_page;

// GET / - The inventory page, list filtered by ?search=
#[instrument(skip(state))]
pub async fn show_inventory(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let search = query.search.unwrap_or_default();
    let mut inventory = state.inventory()?;
    inventory.filter(&search);
    let html = render_page(inventory.view(), &state.currency, &search)?;
    Ok(Html(html))
}

// POST /products/new - Registration form submit
#[instrument(skip(state, form))]
pub async fn submit_product(
    State(state): State<AppState>,
    Form(form): Form<CreateProductRequest>,
) -> Result<Redirect, AppError> {
    state.inventory()?.add_product(form)?;
    Ok(Redirect::to("/"))
}

// POST /products/{id}/delete - Remove button on a card
#[instrument(skip(state))]
pub async fn remove_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.inventory()?.delete_product(&id)?;
    Ok(Redirect::to("/"))
}

pub async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
