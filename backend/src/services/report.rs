//! Balance reporting service

use shared::BalanceRow;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::services::{LocationService, MovementService, ProductService};

/// Reporting service
#[derive(Clone)]
pub struct ReportService {
    db: SqlitePool,
}

impl ReportService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Rebuild the balance of every (product, location) pair from the full
    /// movement history
    pub async fn balance_report(&self) -> AppResult<Vec<BalanceRow>> {
        let products = ProductService::new(self.db.clone()).list_products().await?;
        let locations = LocationService::new(self.db.clone()).list_locations().await?;
        let movements = MovementService::new(self.db.clone()).list_movements().await?;

        let rows = shared::compute_balances(&products, &locations, &movements);
        tracing::debug!(
            movements = movements.len(),
            rows = rows.len(),
            "Balance report computed"
        );
        Ok(rows)
    }
}
