//! Pricing adapters - In-process tier storage.

mod in_memory_tier_reader;

pub use in_memory_tier_reader::InMemoryPricingTierReader;
