//! User Model
//!
//! Sellers are users with [`Role::Seller`]; the administrator is not stored,
//! it is resolved by the credential verifier.

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Customer => "customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity (also the persisted session identity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login name
    pub username: String,
    pub role: Role,
}

impl User {
    /// Build a seller with a timestamp id (the admin form convention)
    pub fn new_seller(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: crate::util::now_millis().to_string(),
            name: name.into(),
            username: username.into(),
            role: Role::Seller,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_seller(&self) -> bool {
        self.role == Role::Seller
    }
}
