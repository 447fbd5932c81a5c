//! The single administrator identity

use crate::auth::password::{hash_password, verify_password};
use crate::config::AdminConfig;
use crate::error::AppError;

/// Administrator username plus an argon2 hash of the password.
///
/// A plaintext password from configuration is hashed once at startup and
/// never kept in memory afterwards.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Build credentials from a username and an existing PHC hash
    pub fn from_hash(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Build credentials from a plaintext password
    pub fn from_plaintext(username: impl Into<String>, password: &str) -> Result<Self, AppError> {
        Ok(Self::from_hash(username, hash_password(password)?))
    }

    /// Build credentials from configuration, preferring a configured hash
    pub fn from_config(config: &AdminConfig) -> Result<Self, AppError> {
        match (&config.password_hash, &config.password) {
            (Some(hash), _) => {
                // Malformed hashes are rejected here, at startup.
                verify_password("", hash)?;
                Ok(Self::from_hash(config.username.clone(), hash.clone()))
            }
            (None, Some(password)) => Self::from_plaintext(config.username.clone(), password),
            (None, None) => Err(AppError::Config(
                "ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set".to_string(),
            )),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt.
    ///
    /// The password hash is always evaluated, so a wrong username costs the
    /// same as a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let password_ok = verify_password(password, &self.password_hash)?;
        Ok(password_ok && username == self.username)
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
