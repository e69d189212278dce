//! Business logic services for the Inventory Tracker

pub mod location;
pub mod movement;
pub mod product;
pub mod report;

pub use location::LocationService;
pub use movement::MovementService;
pub use product::ProductService;
pub use report::ReportService;

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Form submitted to rename a product or a location
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RenameInput {
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub name: String,
}

/// Reject form fields that are empty once surrounding whitespace is removed
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    shared::require_text(value)
        .map(|_| ())
        .map_err(|msg| field_error("blank", msg))
}

/// Reject quantities that are not positive whole numbers
pub(crate) fn positive_quantity(value: &str) -> Result<(), ValidationError> {
    shared::parse_quantity(value)
        .map(|_| ())
        .map_err(|msg| field_error("quantity", msg))
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
