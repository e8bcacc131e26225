//! HTTP adapter for pricing endpoints.
//!
//! - `GET /api/pricing/chain/quote` - Quote a plan for a number of locations
//! - `GET /api/pricing/chain/tiers` - List a plan's tier schedule

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{get_chain_quote, list_chain_tiers, PricingApiError, PricingAppState};
pub use routes::{pricing_router, pricing_routes};
