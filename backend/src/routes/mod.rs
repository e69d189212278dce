//! Route definitions for the Inventory Tracker

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create all application routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Landing page is the balance report
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/report", get(handlers::get_balance_report))
        .merge(product_routes())
        .merge(location_routes())
        .merge(movement_routes())
}

/// Product catalogue routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::list_products))
        .route(
            "/products/add",
            get(handlers::add_product_form).post(handlers::add_product),
        )
        .route(
            "/products/edit/:product_id",
            get(handlers::edit_product_form).post(handlers::edit_product),
        )
        .route("/products/delete/:product_id", post(handlers::delete_product))
}

/// Storage location routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(handlers::list_locations))
        .route(
            "/locations/add",
            get(handlers::add_location_form).post(handlers::add_location),
        )
        .route(
            "/locations/edit/:location_id",
            get(handlers::edit_location_form).post(handlers::edit_location),
        )
        .route("/locations/delete/:location_id", post(handlers::delete_location))
}

/// Movement routes; movements cannot be edited or deleted
fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/movements", get(handlers::list_movements))
        .route(
            "/movements/add",
            get(handlers::add_movement_form).post(handlers::add_movement),
        )
}
