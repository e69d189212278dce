//! Balance report handlers

use axum::{extract::State, response::Redirect, Json};
use shared::BalanceRow;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::AppState;

/// The report is the landing page
pub async fn home() -> Redirect {
    Redirect::to("/report")
}

/// Current balance per (product, location)
pub async fn get_balance_report(State(state): State<AppState>) -> AppResult<Json<Vec<BalanceRow>>> {
    let service = ReportService::new(state.db);
    let rows = service.balance_report().await?;
    Ok(Json(rows))
}
