//! Domain models for the Inventory Tracker

mod location;
mod movement;
mod product;

pub use location::*;
pub use movement::*;
pub use product::*;
