//! Inventory Tracker - Server
//!
//! Serves the product, location, movement and balance report endpoints over
//! a single SQLite database file.

use std::net::SocketAddr;

use inventory_server::{connect_database, create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_server=debug,shared=info,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Inventory Tracker");
    tracing::info!("Environment: {}", config.environment);

    tracing::info!("Opening database {}", config.database.url);
    let db_pool = connect_database(&config.database).await?;
    tracing::info!("Database ready");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(db_pool, config);
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
