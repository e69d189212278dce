//! HTTP handlers for location endpoints

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use shared::Location;

use super::FormView;
use crate::error::AppResult;
use crate::services::location::{CreateLocationInput, LocationService};
use crate::services::RenameInput;
use crate::AppState;

/// List all locations
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let service = LocationService::new(state.db);
    let locations = service.list_locations().await?;
    Ok(Json(locations))
}

/// Empty form for adding a location
pub async fn add_location_form() -> Json<FormView<Location>> {
    Json(FormView::add())
}

/// Add a location
pub async fn add_location(
    State(state): State<AppState>,
    Form(input): Form<CreateLocationInput>,
) -> AppResult<Redirect> {
    let service = LocationService::new(state.db);
    service.create_location(input).await?;
    Ok(Redirect::to("/locations"))
}

/// Form for renaming an existing location
pub async fn edit_location_form(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Json<FormView<Location>>> {
    let service = LocationService::new(state.db);
    let location = service.get_location(&location_id).await?;
    Ok(Json(FormView::edit(location)))
}

/// Rename a location
pub async fn edit_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
    Form(input): Form<RenameInput>,
) -> AppResult<Redirect> {
    let service = LocationService::new(state.db);
    service.update_location(&location_id, input).await?;
    Ok(Redirect::to("/locations"))
}

/// Delete a location
pub async fn delete_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Redirect> {
    let service = LocationService::new(state.db);
    service.delete_location(&location_id).await?;
    Ok(Redirect::to("/locations"))
}
