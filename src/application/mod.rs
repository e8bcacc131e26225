//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::pricing::{
    ChainQuote, ListPricingTiersHandler, ListPricingTiersQuery, ListPricingTiersResult,
    QuoteChainPriceHandler, QuoteChainPriceQuery,
};
