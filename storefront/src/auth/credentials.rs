//! Credential verification
//!
//! Login is a pure lookup: given a username/password pair and the current
//! seller list, a verifier returns the identity to store in the session.

use crate::core::Config;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use shared::models::{Role, User};
use shared::{AppError, AppResult};
use std::collections::HashMap;

/// Administrator identity id (not stored in the seller list)
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_NAME: &str = "Administrador";

fn admin_user(username: &str) -> User {
    User {
        id: ADMIN_ID.to_string(),
        name: ADMIN_NAME.to_string(),
        username: username.to_string(),
        role: Role::Admin,
    }
}

/// Pluggable credential check
pub trait CredentialVerifier: Send + Sync {
    /// Resolve a username/password pair to a user, `None` if rejected
    fn verify(&self, username: &str, password: &str, sellers: &[User]) -> Option<User>;
}

/// Demo credentials: one admin pair plus a password shared by all sellers
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    admin_username: String,
    admin_password: String,
    seller_password: String,
}

impl DemoCredentials {
    pub fn new(
        admin_username: impl Into<String>,
        admin_password: impl Into<String>,
        seller_password: impl Into<String>,
    ) -> Self {
        Self {
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
            seller_password: seller_password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.admin_username,
            &config.admin_password,
            &config.seller_password,
        )
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new("admin", "admin123", "123")
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str, sellers: &[User]) -> Option<User> {
        if username == self.admin_username && password == self.admin_password {
            return Some(admin_user(username));
        }
        sellers
            .iter()
            .find(|s| s.username == username)
            .filter(|_| password == self.seller_password)
            .cloned()
    }
}

/// Hash password using argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify password against an argon2 PHC string
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is malformed");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Per-user argon2 password hashes
///
/// A seller can only log in while they are still in the seller list, even
/// if a hash for their username remains.
#[derive(Debug, Clone, Default)]
pub struct HashedCredentials {
    admin: Option<(String, String)>,
    sellers: HashMap<String, String>,
}

impl HashedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(mut self, username: &str, password: &str) -> AppResult<Self> {
        self.admin = Some((username.to_string(), hash_password(password)?));
        Ok(self)
    }

    pub fn set_seller_password(&mut self, username: &str, password: &str) -> AppResult<()> {
        let hash = hash_password(password)?;
        self.sellers.insert(username.to_string(), hash);
        Ok(())
    }

    pub fn remove_seller(&mut self, username: &str) -> bool {
        self.sellers.remove(username).is_some()
    }
}

impl CredentialVerifier for HashedCredentials {
    fn verify(&self, username: &str, password: &str, sellers: &[User]) -> Option<User> {
        if let Some((admin_name, hash)) = &self.admin
            && admin_name == username
        {
            return verify_password(password, hash).then(|| admin_user(username));
        }
        let hash = self.sellers.get(username)?;
        let seller = sellers.iter().find(|s| s.username == username)?;
        verify_password(password, hash).then(|| seller.clone())
    }
}
