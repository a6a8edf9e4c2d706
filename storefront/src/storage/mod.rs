//! Key-value persistence layer
//!
//! Every store persists whole-collection JSON snapshots under one string key
//! per collection. Nothing outside the stores talks to a [`KvStore`].
//!
//! | Key | Value |
//! |-----|-------|
//! | `tcp_products` | `Vec<Product>` |
//! | `tcp_categories` | `Vec<Category>` |
//! | `tcp_sellers` | `Vec<User>` |
//! | `tcp_sales` | `Vec<Sale>` (newest first) |
//! | `tcp_payments` | `Vec<PaymentConfig>` |
//! | `techcase_cart` | `Vec<CartItem>` |
//! | `tcp_user` | `User` (current session) |

mod memory;
mod redb_store;

pub use memory::MemoryStore;
#[cfg(test)]
pub(crate) use memory::FailingStore;
pub use redb_store::RedbStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::AppError;
use thiserror::Error;

pub const PRODUCTS_KEY: &str = "tcp_products";
pub const CATEGORIES_KEY: &str = "tcp_categories";
pub const SELLERS_KEY: &str = "tcp_sellers";
pub const SALES_KEY: &str = "tcp_sales";
pub const PAYMENTS_KEY: &str = "tcp_payments";
pub const CART_KEY: &str = "techcase_cart";
pub const SESSION_KEY: &str = "tcp_user";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::database(e.to_string())
    }
}

/// String-keyed, string-valued persistent store
///
/// Reads and writes are synchronous and durable once the call returns.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Drop every key
    fn clear(&self) -> StorageResult<()>;
}

/// Read and decode a collection snapshot.
///
/// Missing keys, read failures and malformed JSON all yield `None`; the
/// latter two are logged so a corrupted collection does not vanish silently.
pub fn load_json<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Option<T> {
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read persisted collection");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                key = %key,
                error = %e,
                "Persisted collection is malformed, treating as absent"
            );
            None
        }
    }
}

/// Encode and write a full collection snapshot
pub fn save_json<T: Serialize + ?Sized>(
    kv: &dyn KvStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    kv.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let kv = MemoryStore::new();
        let value: Option<Vec<i64>> = load_json(&kv, PRODUCTS_KEY);
        assert!(value.is_none());
    }

    #[test]
    fn test_load_malformed_is_absent() {
        let kv = MemoryStore::new();
        kv.set(SALES_KEY, "{not json").unwrap();
        let value: Option<Vec<i64>> = load_json(&kv, SALES_KEY);
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let kv = MemoryStore::new();
        save_json(&kv, CART_KEY, &vec![1, 2, 3]).unwrap();
        let value: Option<Vec<i64>> = load_json(&kv, CART_KEY);
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_storage_error_maps_to_database_code() {
        let json_err = serde_json::from_str::<i64>("x").unwrap_err();
        let err: AppError = StorageError::from(json_err).into();
        assert_eq!(err.code, shared::ErrorCode::DatabaseError);
    }
}
