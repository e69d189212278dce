//! Shared types for the Inventory Tracker
//!
//! Domain records, input validation and the balance report computation.
//! Nothing in this crate performs I/O, so the backend and its tests can
//! exercise the same rules.

pub mod models;
pub mod report;
pub mod validation;

pub use models::*;
pub use report::*;
pub use validation::*;
