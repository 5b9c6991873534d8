//! Pricing engine for ScreenBook.
//!
//! Derives a cost breakdown from a campaign draft snapshot. Pure and
//! stateless: the breakdown is recomputed on demand and never stored.

pub mod pricing;

pub use pricing::{campaign_days, compute_pricing, hour_multiplier, PricingBreakdown, ScreenCost};
