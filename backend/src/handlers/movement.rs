//! HTTP handlers for movement endpoints

use axum::{extract::State, response::Redirect, Form, Json};
use serde::Serialize;
use shared::{Location, Product, ProductMovement};

use crate::error::AppResult;
use crate::services::movement::RecordMovementInput;
use crate::services::{LocationService, MovementService, ProductService};
use crate::AppState;

/// Movement history together with the records it refers to
#[derive(Debug, Serialize)]
pub struct MovementsView {
    pub movements: Vec<ProductMovement>,
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
}

/// Choices offered by the movement form
#[derive(Debug, Serialize)]
pub struct MovementFormView {
    pub action: &'static str,
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
}

/// List all movements, newest first
pub async fn list_movements(State(state): State<AppState>) -> AppResult<Json<MovementsView>> {
    let movements = MovementService::new(state.db.clone()).list_movements().await?;
    let products = ProductService::new(state.db.clone()).list_products().await?;
    let locations = LocationService::new(state.db).list_locations().await?;

    Ok(Json(MovementsView {
        movements,
        products,
        locations,
    }))
}

/// Form for recording a movement
pub async fn add_movement_form(State(state): State<AppState>) -> AppResult<Json<MovementFormView>> {
    let products = ProductService::new(state.db.clone()).list_products().await?;
    let locations = LocationService::new(state.db).list_locations().await?;

    Ok(Json(MovementFormView {
        action: "Add",
        products,
        locations,
    }))
}

/// Record a movement
pub async fn add_movement(
    State(state): State<AppState>,
    Form(input): Form<RecordMovementInput>,
) -> AppResult<Redirect> {
    let service = MovementService::new(state.db);
    service.record_movement(input).await?;
    Ok(Redirect::to("/movements"))
}
