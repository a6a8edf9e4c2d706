//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Current selling price
    pub price: f64,
    /// Price before discount (shown struck through)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Image URL or data URI
    pub image: String,
    /// Category reference by name (advisory, not enforced)
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    /// Discount badge percentage: `round((original - price) / original * 100)`
    ///
    /// `None` when there is no original price or it is not above the current price.
    pub fn discount_percent(&self) -> Option<i64> {
        let original = self.original_price?;
        if original <= 0.0 || original <= self.price {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as i64)
    }

    /// Whether the product carries the "new release" flag
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }
}

/// Create product payload (id assigned by the store)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_new: Option<bool>,
}

impl ProductCreate {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            category: self.category,
            is_new: self.is_new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, original_price: Option<f64>) -> Product {
        Product {
            id: 1,
            title: "iPhone 15 Pro Max Titanium".to_string(),
            price,
            original_price,
            image: String::new(),
            category: "Smartphones".to_string(),
            is_new: Some(true),
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(8299.0, Some(9499.0)).discount_percent(), Some(13));
        assert_eq!(product(1899.0, Some(2299.0)).discount_percent(), Some(17));
        assert_eq!(product(50.0, Some(100.0)).discount_percent(), Some(50));
    }

    #[test]
    fn test_no_discount_without_higher_original() {
        assert_eq!(product(100.0, None).discount_percent(), None);
        assert_eq!(product(100.0, Some(100.0)).discount_percent(), None);
        assert_eq!(product(100.0, Some(80.0)).discount_percent(), None);
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(product(10.0, Some(12.0))).unwrap();
        assert_eq!(json["originalPrice"], 12.0);
        assert_eq!(json["isNew"], true);

        let plain: Product = serde_json::from_str(
            r#"{"id":6,"title":"Capa MagSafe Leather","price":399,"image":"","category":"Acessórios"}"#,
        )
        .unwrap();
        assert_eq!(plain.original_price, None);
        assert!(!plain.is_new());
    }
}
