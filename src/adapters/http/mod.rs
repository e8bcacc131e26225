//! HTTP adapters - REST API implementations.

pub mod pricing;

pub use pricing::pricing_router;
pub use pricing::PricingAppState;
