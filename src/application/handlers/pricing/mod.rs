//! Pricing handlers.
//!
//! ## Queries
//! - Quote a chain subscription for a number of locations
//! - List the tier schedule of a plan (pricing tables, backoffice)

mod list_pricing_tiers;
mod quote_chain_price;

pub use list_pricing_tiers::{
    ListPricingTiersHandler, ListPricingTiersQuery, ListPricingTiersResult,
};
pub use quote_chain_price::{ChainQuote, QuoteChainPriceHandler, QuoteChainPriceQuery};
