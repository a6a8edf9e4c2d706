//! Data models
//!
//! Persisted by the storefront stores as JSON snapshots, one collection per
//! storage key. Field names are camelCase on the wire.

pub mod cart;
pub mod category;
pub mod payment;
pub mod product;
pub mod sale;
pub mod store_info;
pub mod user;

// Re-exports
pub use cart::*;
pub use category::*;
pub use payment::*;
pub use product::*;
pub use sale::*;
pub use store_info::*;
pub use user::*;
