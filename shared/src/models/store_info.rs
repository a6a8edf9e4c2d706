//! Store Info Model

use serde::{Deserialize, Serialize};

/// Store identity printed on receipts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    /// Company tax id (CNPJ)
    pub cnpj: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "TechCase Pro".to_string(),
            address: "Av. Paulista, 1000 - São Paulo, SP".to_string(),
            cnpj: "00.000.000/0001-00".to_string(),
        }
    }
}
