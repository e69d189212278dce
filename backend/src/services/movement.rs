//! Stock movement service
//!
//! Movements are append-only: they can be recorded and listed, never edited
//! or deleted. Balances are derived from them by the report service.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::ProductMovement;
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::ProductService;

/// Movement service for recording transfers of stock
#[derive(Clone)]
pub struct MovementService {
    db: SqlitePool,
}

#[derive(Debug, FromRow)]
struct MovementRow {
    movement_id: String,
    timestamp: DateTime<Utc>,
    product_id: String,
    from_location: Option<String>,
    to_location: Option<String>,
    qty: i64,
}

impl From<MovementRow> for ProductMovement {
    fn from(row: MovementRow) -> Self {
        ProductMovement {
            movement_id: row.movement_id,
            timestamp: row.timestamp,
            product_id: row.product_id,
            from_location: row.from_location,
            to_location: row.to_location,
            qty: row.qty,
        }
    }
}

/// Form submitted to record a movement.
///
/// `qty` stays a string until validation so that a non-numeric value is a
/// validation failure rather than a rejected request body.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecordMovementInput {
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub movement_id: String,
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub product_id: String,
    #[serde(default)]
    pub from_location: Option<String>,
    #[serde(default)]
    pub to_location: Option<String>,
    #[serde(default)]
    #[validate(custom = "crate::services::positive_quantity")]
    pub qty: String,
}

impl MovementService {
    /// Create a new MovementService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List all movements, newest first
    pub async fn list_movements(&self) -> AppResult<Vec<ProductMovement>> {
        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT movement_id, timestamp, product_id, from_location, to_location, qty
            FROM product_movements
            ORDER BY timestamp DESC, movement_id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ProductMovement::from).collect())
    }

    /// Record a movement
    pub async fn record_movement(&self, input: RecordMovementInput) -> AppResult<ProductMovement> {
        input.validate()?;

        let qty = shared::parse_quantity(&input.qty)
            .map_err(|msg| AppError::validation("qty", msg))?;
        let movement = ProductMovement {
            movement_id: input.movement_id.trim().to_string(),
            timestamp: Utc::now(),
            product_id: input.product_id.trim().to_string(),
            from_location: shared::optional_text(input.from_location.as_deref()),
            to_location: shared::optional_text(input.to_location.as_deref()),
            qty,
        };

        // Location ids are stored as given; only the product must exist
        let products = ProductService::new(self.db.clone());
        if !products.product_exists(&movement.product_id).await? {
            return Err(AppError::NotFound("Product".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO product_movements
                (movement_id, timestamp, product_id, from_location, to_location, qty)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&movement.movement_id)
        .bind(movement.timestamp)
        .bind(&movement.product_id)
        .bind(&movement.from_location)
        .bind(&movement.to_location)
        .bind(movement.qty)
        .execute(&self.db)
        .await
        .map_err(|e| AppError::from_insert(e, "Movement ID"))?;

        if !movement.has_stock_effect() {
            tracing::debug!(
                movement_id = %movement.movement_id,
                "Movement has neither source nor destination"
            );
        }
        tracing::info!(
            movement_id = %movement.movement_id,
            product_id = %movement.product_id,
            qty = movement.qty,
            "Movement recorded"
        );
        Ok(movement)
    }
}
