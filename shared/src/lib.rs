//! Shared types for TechCasePro
//!
//! Domain models persisted by the storefront stores, the unified error
//! system and small time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
