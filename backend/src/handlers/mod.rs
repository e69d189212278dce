//! HTTP handlers for the Inventory Tracker
//!
//! List views and form models are served as JSON. Successful form
//! submissions redirect to the matching list view.

mod health;
mod location;
mod movement;
mod product;
mod report;

pub use health::*;
pub use location::*;
pub use movement::*;
pub use product::*;
pub use report::*;

use serde::Serialize;

/// Model behind an add or edit form
#[derive(Debug, Serialize)]
pub struct FormView<T> {
    /// "Add" or "Edit"
    pub action: &'static str,
    /// Current record when editing
    pub record: Option<T>,
}

impl<T> FormView<T> {
    pub fn add() -> Self {
        Self {
            action: "Add",
            record: None,
        }
    }

    pub fn edit(record: T) -> Self {
        Self {
            action: "Edit",
            record: Some(record),
        }
    }
}
