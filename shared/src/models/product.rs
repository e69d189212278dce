//! Product catalogue models

use serde::{Deserialize, Serialize};

/// A product that can be moved between locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// User-supplied identifier, immutable once created
    pub product_id: String,
    pub name: String,
}

impl Product {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
        }
    }
}
