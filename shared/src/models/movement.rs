//! Stock movement models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded transfer of a quantity of one product.
///
/// `from_location` and `to_location` are independently optional: a movement
/// with only a destination is a receipt, one with only a source is an issue,
/// and one with neither has no stock effect. Movements are never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMovement {
    pub movement_id: String,
    pub timestamp: DateTime<Utc>,
    pub product_id: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    /// Always positive
    pub qty: i64,
}

impl ProductMovement {
    /// Whether recording this movement changes any balance
    pub fn has_stock_effect(&self) -> bool {
        self.from_location.is_some() || self.to_location.is_some()
    }
}
