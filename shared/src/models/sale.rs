//! Sale Model

use super::CartItem;
use serde::{Deserialize, Serialize};

/// Completed sale record (append-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Creation timestamp in milliseconds
    pub id: i64,
    /// Absent for online sales
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    pub total: f64,
    /// ISO-8601 creation time
    pub date: String,
    pub items: Vec<CartItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_cpf: Option<String>,
    /// Display name of the payment method
    pub payment_method: String,
}

impl Sale {
    pub fn is_online(&self) -> bool {
        self.seller_id.is_none()
    }

    /// Total number of units sold
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity as i64).sum()
    }
}

/// Sale payload supplied by checkout / POS (id and date are stamped by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    pub seller_id: Option<String>,
    pub seller_name: Option<String>,
    pub total: f64,
    pub items: Vec<CartItem>,
    pub customer_name: Option<String>,
    pub customer_cpf: Option<String>,
    pub payment_method: String,
}

impl SaleDraft {
    pub fn stamp(self, id: i64, date: String) -> Sale {
        Sale {
            id,
            seller_id: self.seller_id,
            seller_name: self.seller_name,
            total: self.total,
            date,
            items: self.items,
            customer_name: self.customer_name,
            customer_cpf: self.customer_cpf,
            payment_method: self.payment_method,
        }
    }
}
