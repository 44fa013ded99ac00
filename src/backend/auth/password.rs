/**
 * Password Hashing
 *
 * Salted bcrypt hashing and verification. bcrypt is deliberately slow, so
 * both operations are moved onto Tokio's blocking pool instead of running on
 * the async executor.
 *
 * Plaintext passwords are never logged or returned.
 */

use crate::backend::error::BackendError;

/// bcrypt hasher with a configured work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// # Errors
    ///
    /// Fails with an internal error if bcrypt rejects the input or the
    /// blocking task does not complete.
    pub async fn hash(&self, plaintext: &str) -> Result<String, BackendError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hashed)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A mismatch is `Ok(false)`, not an error. An unparseable stored hash is
    /// an internal error.
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, BackendError> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();
        let matched =
            tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hashed)).await??;
        Ok(matched)
    }

    /// Spend one bcrypt derivation on `plaintext` and discard the result
    ///
    /// Login runs this when no account matches the email, so that path costs
    /// the same as a wrong password.
    pub async fn verify_without_hash(&self, plaintext: &str) -> Result<(), BackendError> {
        self.hash(plaintext).await?;
        Ok(())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(crate::shared::config::DEFAULT_BCRYPT_COST)
    }
}
