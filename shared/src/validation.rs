//! Validation utilities for submitted form values
//!
//! Form fields arrive as raw strings. These helpers normalize them the same
//! way for every entity kind: surrounding whitespace never counts as content.

// ============================================================================
// Text Fields
// ============================================================================

/// Trim a required text field, rejecting values that are blank
pub fn require_text(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field is required");
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank values become `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ============================================================================
// Quantities
// ============================================================================

/// Largest quantity a single movement may carry
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Parse a movement quantity.
///
/// An empty field counts as zero and is therefore rejected like any other
/// non-positive value.
pub fn parse_quantity(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    let qty = if trimmed.is_empty() {
        0
    } else {
        trimmed
            .parse::<i64>()
            .map_err(|_| "Quantity must be a whole number")?
    };
    validate_quantity(qty)?;
    Ok(qty)
}

/// Validate that a quantity is strictly positive and within `MAX_QUANTITY`
pub fn validate_quantity(qty: i64) -> Result<(), &'static str> {
    if qty <= 0 {
        return Err("Quantity must be positive");
    }
    if qty > MAX_QUANTITY {
        return Err("Quantity is too large");
    }
    Ok(())
}
