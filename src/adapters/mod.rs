//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Axum routes for quoting and tier listings
//! - `postgres` - Tier schedules stored in PostgreSQL
//! - `pricing` - In-memory tier storage seeded from the catalog file

pub mod http;
pub mod postgres;
pub mod pricing;

pub use postgres::PostgresPricingTierReader;
pub use pricing::InMemoryPricingTierReader;
