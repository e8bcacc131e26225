//! Axum router configuration for pricing endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_chain_quote, list_chain_tiers, PricingAppState};

/// Create the pricing API router.
///
/// # Routes
/// - `GET /chain/quote?plan_id=&currency=&locations=` - Quote a multi-location subscription
/// - `GET /chain/tiers?plan_id=&currency=` - List the additional-location tiers for a plan
pub fn pricing_routes() -> Router<PricingAppState> {
    Router::new()
        .route("/chain/quote", get(get_chain_quote))
        .route("/chain/tiers", get(list_chain_tiers))
}

/// Create the complete pricing module router, suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", pricing_router())
///     .with_state(PricingAppState::new(reader, catalog));
/// ```
pub fn pricing_router() -> Router<PricingAppState> {
    Router::new().nest("/pricing", pricing_routes())
}
