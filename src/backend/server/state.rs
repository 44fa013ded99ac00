/**
 * Application State Management
 *
 * `AppState` is built once at startup from `AppConfig` and cloned into every
 * handler. Everything in it is immutable after construction; the only
 * shared mutable resource is the database behind the pool.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need (`State<SqlitePool>`, `State<SessionKeys>`, ...).
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db: SqlitePool,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,

    /// Session token signing/verification keys
    pub session_keys: SessionKeys,

    /// Session cookie attributes
    pub cookies: CookieSettings,

    /// Password hasher with the configured cost
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Build state from configuration and an open pool
    pub fn new(config: AppConfig, db: SqlitePool) -> Self {
        Self {
            session_keys: SessionKeys::new(&config.jwt_secret),
            cookies: CookieSettings::from_config(&config),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            config: Arc::new(config),
            db,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}

impl FromRef<AppState> for CookieSettings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookies.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
