/**
 * Database Setup
 *
 * Opens the SQLite connection pool described by `AppConfig::database_url`
 * and applies the migrations in `migrations/`.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: connection or
 * migration failures abort startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a pool and run migrations
///
/// Foreign keys are enforced on every connection so a movie can only be
/// inserted for an existing owner.
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Fresh in-memory database for tests
///
/// A single connection keeps every query on the same in-memory database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    connect_database("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory test database")
}
