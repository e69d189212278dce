//! Balance report computation
//!
//! Balances are never stored. Every report is rebuilt from the complete set
//! of products, locations and movements, so it always reflects the current
//! store contents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Location, Product, ProductMovement};

/// Display name used when a movement refers to a deleted product or location
pub const UNKNOWN_NAME: &str = "unknown";

/// Net quantity of one product at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub product: String,
    pub product_id: String,
    pub location: String,
    pub location_id: String,
    pub qty: i64,
}

/// Compute the balance of every (product, location) pair with non-zero stock.
///
/// Rows are ordered by product name, then location name; identifiers break
/// ties between records sharing a display name.
pub fn compute_balances(
    products: &[Product],
    locations: &[Location],
    movements: &[ProductMovement],
) -> Vec<BalanceRow> {
    // Summed in i128, clamped to i64 on output
    let mut balance: HashMap<(&str, &str), i128> =
        HashMap::with_capacity(products.len() * locations.len());
    for product in products {
        for location in locations {
            balance.insert((product.product_id.as_str(), location.location_id.as_str()), 0);
        }
    }

    for movement in movements {
        let qty = i128::from(movement.qty);
        if let Some(to) = movement.to_location.as_deref() {
            *balance.entry((movement.product_id.as_str(), to)).or_insert(0) += qty;
        }
        if let Some(from) = movement.from_location.as_deref() {
            *balance.entry((movement.product_id.as_str(), from)).or_insert(0) -= qty;
        }
    }

    let product_names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.name.as_str()))
        .collect();
    let location_names: HashMap<&str, &str> = locations
        .iter()
        .map(|l| (l.location_id.as_str(), l.name.as_str()))
        .collect();

    let mut rows: Vec<BalanceRow> = balance
        .into_iter()
        .filter(|(_, qty)| *qty != 0)
        .map(|((product_id, location_id), qty)| BalanceRow {
            product: resolve_name(&product_names, "product", product_id),
            product_id: product_id.to_string(),
            location: resolve_name(&location_names, "location", location_id),
            location_id: location_id.to_string(),
            qty: clamp_balance(product_id, location_id, qty),
        })
        .collect();

    rows.sort_by(|a, b| {
        (&a.product, &a.location, &a.product_id, &a.location_id)
            .cmp(&(&b.product, &b.location, &b.product_id, &b.location_id))
    });
    rows
}

fn clamp_balance(product_id: &str, location_id: &str, qty: i128) -> i64 {
    i64::try_from(qty).unwrap_or_else(|_| {
        tracing::warn!(product_id, location_id, %qty, "balance out of range, clamped");
        if qty > 0 {
            i64::MAX
        } else {
            i64::MIN
        }
    })
}

fn resolve_name(names: &HashMap<&str, &str>, kind: &str, id: &str) -> String {
    match names.get(id) {
        Some(name) => (*name).to_string(),
        None => {
            tracing::warn!(kind, id, "balance refers to a deleted record");
            UNKNOWN_NAME.to_string()
        }
    }
}
