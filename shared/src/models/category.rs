//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `name` is what products reference in `Product::category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image: String,
}

/// Create category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub image: String,
}

impl CategoryCreate {
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            image: self.image,
        }
    }
}
