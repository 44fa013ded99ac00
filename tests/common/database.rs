//! Application fixtures backed by an in-memory database
//!
//! Each `TestApp` owns its own SQLite memory database, so tests are isolated
//! without cleanup.

use axum::Router;
use bitfilms::backend::server::build_app;
use bitfilms::backend::server::config::connect_database;
use bitfilms::shared::AppConfig;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router plus a handle on its database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub config: AppConfig,
}

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url("sqlite::memory:")
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test config")
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let pool = connect_database(&config.database_url, 1)
            .await
            .expect("Failed to create test database");
        let router = build_app(config.clone(), pool.clone());

        Self {
            router,
            pool,
            config,
        }
    }
}
