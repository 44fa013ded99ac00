/**
 * Server Initialization
 *
 * Builds the application from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Build `AppState` (session keys, cookie settings, hasher)
 * 3. Create the router
 *
 * A database that cannot be opened aborts startup.
 */

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Pool size for file-backed databases
pub const MAX_CONNECTIONS: u32 = 5;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!(
        environment = ?config.environment,
        "Initializing bitfilms backend server"
    );

    let db = connect_database(&config.database_url, MAX_CONNECTIONS).await?;

    Ok(build_app(config, db))
}

/// Build the application around an already open pool
pub fn build_app(config: AppConfig, db: sqlx::SqlitePool) -> Router<()> {
    let app_state = AppState::new(config, db);
    create_router(app_state)
}
