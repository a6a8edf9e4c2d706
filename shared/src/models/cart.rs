//! Cart line Model

use super::Product;
use serde::{Deserialize, Serialize};

/// Cart line: a product snapshot plus quantity
///
/// Serialized flat (product fields + `quantity`), the same shape used for
/// `Sale::items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always >= 1
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product.id
    }

    pub fn price(&self) -> f64 {
        self.product.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_json() {
        let item = CartItem {
            product: Product {
                id: 3,
                title: "AirPods Pro 2ª Geração".to_string(),
                price: 1899.0,
                original_price: Some(2299.0),
                image: String::new(),
                category: "Acessórios".to_string(),
                is_new: None,
            },
            quantity: 2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["originalPrice"], 2299.0);

        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
