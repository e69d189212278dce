//! Inventory Tracker - Backend
//!
//! Records products, storage locations and the movements of stock between
//! them, and derives the balance of every product at every location.

use std::{str::FromStr, sync::Arc};

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;
use crate::config::DatabaseConfig;
use crate::error::AppResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Open the SQLite database and bring its schema up to date.
///
/// Idle connections are never recycled so that an in-memory database
/// (`sqlite::memory:`) survives for the lifetime of the pool.
pub async fn connect_database(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::app_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
