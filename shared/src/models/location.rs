//! Storage location models

use serde::{Deserialize, Serialize};

/// A place where stock is held (warehouse, shop floor, shelf, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// User-supplied identifier, immutable once created
    pub location_id: String,
    pub name: String,
}

impl Location {
    pub fn new(location_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
            name: name.into(),
        }
    }
}
