/**
 * Session Cookie
 *
 * Builds the cookie that carries the session token. Attributes depend on the
 * environment:
 *
 * - always: `Path=/`, `HttpOnly`, `SameSite=None`, `Max-Age` of seven days
 * - production: additionally `Domain=<cookie_domain>` and `Secure`
 *
 * Signing out reissues the same cookie with an empty value and `Max-Age=0`.
 * The token itself stays valid until it expires.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::backend::auth::sessions::TOKEN_TTL_DAYS;
use crate::shared::config::{AppConfig, Environment};

/// Name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "jwt";

/// Cookie attributes derived from configuration
#[derive(Debug, Clone)]
pub struct CookieSettings {
    environment: Environment,
    domain: String,
}

impl CookieSettings {
    pub fn new(environment: Environment, domain: impl Into<String>) -> Self {
        Self {
            environment,
            domain: domain.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.environment, config.cookie_domain.clone())
    }

    /// Cookie delivering a freshly issued token
    pub fn session(&self, token: String) -> Cookie<'static> {
        self.build(token, Duration::days(TOKEN_TTL_DAYS))
    }

    /// Cookie that makes the browser drop the session
    pub fn cleared(&self) -> Cookie<'static> {
        self.build(String::new(), Duration::ZERO)
    }

    fn build(&self, value: String, max_age: Duration) -> Cookie<'static> {
        let mut builder = Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::None)
            .max_age(max_age);

        if self.environment.is_production() {
            builder = builder.domain(self.domain.clone()).secure(true);
        }

        builder.build()
    }
}
