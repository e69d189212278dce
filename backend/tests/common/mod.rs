//! Shared fixtures for backend integration tests

#![allow(dead_code)]

use inventory_server::config::DatabaseConfig;
use inventory_server::services::location::CreateLocationInput;
use inventory_server::services::movement::RecordMovementInput;
use inventory_server::services::product::CreateProductInput;
use inventory_server::{connect_database, AppState, Config};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied
pub async fn test_pool() -> SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    connect_database(&config)
        .await
        .expect("in-memory database should open")
}

/// Application state backed by a fresh in-memory database
pub async fn test_state() -> AppState {
    let mut config = Config::default();
    config.environment = "test".to_string();
    AppState::new(test_pool().await, config)
}

pub fn product_input(product_id: &str, name: &str) -> CreateProductInput {
    CreateProductInput {
        product_id: product_id.to_string(),
        name: name.to_string(),
    }
}

pub fn location_input(location_id: &str, name: &str) -> CreateLocationInput {
    CreateLocationInput {
        location_id: location_id.to_string(),
        name: name.to_string(),
    }
}

pub fn movement_input(
    movement_id: &str,
    product_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    qty: &str,
) -> RecordMovementInput {
    RecordMovementInput {
        movement_id: movement_id.to_string(),
        product_id: product_id.to_string(),
        from_location: from.map(str::to_string),
        to_location: to.map(str::to_string),
        qty: qty.to_string(),
    }
}
