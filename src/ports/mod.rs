//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PricingTierReader` - Read access to per-plan tier schedules

mod pricing_tier_reader;

pub use pricing_tier_reader::PricingTierReader;
