//! Storage location service

use serde::Deserialize;
use shared::Location;
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::RenameInput;

/// Location service for managing warehouses, shops and other stock holders
#[derive(Clone)]
pub struct LocationService {
    db: SqlitePool,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    location_id: String,
    name: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(row.location_id, row.name)
    }
}

/// Form submitted to add a location
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateLocationInput {
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub location_id: String,
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub name: String,
}

impl LocationService {
    /// Create a new LocationService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List all locations ordered by name
    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT location_id, name FROM locations ORDER BY name ASC, location_id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// Get a location by identifier
    pub async fn get_location(&self, location_id: &str) -> AppResult<Location> {
        sqlx::query_as::<_, LocationRow>(
            "SELECT location_id, name FROM locations WHERE location_id = ?",
        )
        .bind(location_id)
        .fetch_optional(&self.db)
        .await?
        .map(Location::from)
        .ok_or_else(|| AppError::NotFound("Location".to_string()))
    }

    /// Add a location; duplicates are rejected by the primary key
    pub async fn create_location(&self, input: CreateLocationInput) -> AppResult<Location> {
        input.validate()?;
        let location = Location::new(input.location_id.trim(), input.name.trim());

        sqlx::query("INSERT INTO locations (location_id, name) VALUES (?, ?)")
            .bind(&location.location_id)
            .bind(&location.name)
            .execute(&self.db)
            .await
            .map_err(|e| AppError::from_insert(e, "Location ID"))?;

        tracing::info!(location_id = %location.location_id, "Location added");
        Ok(location)
    }

    /// Rename a location
    pub async fn update_location(&self, location_id: &str, input: RenameInput) -> AppResult<Location> {
        self.get_location(location_id).await?;
        input.validate()?;
        let name = input.name.trim();

        let result = sqlx::query("UPDATE locations SET name = ? WHERE location_id = ?")
            .bind(name)
            .bind(location_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location".to_string()));
        }

        tracing::info!(location_id, "Location updated");
        Ok(Location::new(location_id, name))
    }

    /// Delete a location.
    ///
    /// Movements into or out of it stay on record, and the balance report
    /// lists their stock under a placeholder name.
    pub async fn delete_location(&self, location_id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE location_id = ?")
            .bind(location_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location".to_string()));
        }

        tracing::info!(location_id, "Location deleted");
        Ok(())
    }
}
