//! PostgreSQL adapters - Database implementations for reader ports.

mod pricing_tier_reader;

pub use pricing_tier_reader::PostgresPricingTierReader;
