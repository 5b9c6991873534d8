//! Screen catalog for ScreenBook.
//!
//! Read-only store of bookable screen records with conjunctive filtering
//! for the discovery step. Snapshots load from JSON or from the built-in
//! demo seed; records are validated once at the catalog boundary.

pub mod catalog;
pub mod seed;

pub use catalog::{ScreenCatalog, ScreenFilter};
