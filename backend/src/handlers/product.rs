//! HTTP handlers for product endpoints

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use shared::Product;

use super::FormView;
use crate::error::AppResult;
use crate::services::product::{CreateProductInput, ProductService};
use crate::services::RenameInput;
use crate::AppState;

/// List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Empty form for adding a product
pub async fn add_product_form() -> Json<FormView<Product>> {
    Json(FormView::add())
}

/// Add a product
pub async fn add_product(
    State(state): State<AppState>,
    Form(input): Form<CreateProductInput>,
) -> AppResult<Redirect> {
    let service = ProductService::new(state.db);
    service.create_product(input).await?;
    Ok(Redirect::to("/products"))
}

/// Form for renaming an existing product
pub async fn edit_product_form(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<FormView<Product>>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(&product_id).await?;
    Ok(Json(FormView::edit(product)))
}

/// Rename a product
pub async fn edit_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Form(input): Form<RenameInput>,
) -> AppResult<Redirect> {
    let service = ProductService::new(state.db);
    service.update_product(&product_id, input).await?;
    Ok(Redirect::to("/products"))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Redirect> {
    let service = ProductService::new(state.db);
    service.delete_product(&product_id).await?;
    Ok(Redirect::to("/products"))
}
