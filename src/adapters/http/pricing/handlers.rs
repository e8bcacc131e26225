//! HTTP handlers for pricing endpoints.
//!
//! These handlers connect Axum routes to the pricing query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::pricing::{
    ListPricingTiersHandler, ListPricingTiersQuery, QuoteChainPriceHandler, QuoteChainPriceQuery,
};
use crate::domain::foundation::{CurrencyCode, PlanId};
use crate::domain::pricing::{PlanCatalog, PricingError};
use crate::ports::PricingTierReader;

use super::dto::{ErrorResponse, QuoteParams, QuoteResponse, TierListParams, TierListResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for pricing routes.
#[derive(Clone)]
pub struct PricingAppState {
    pub tier_reader: Arc<dyn PricingTierReader>,
    pub catalog: Arc<PlanCatalog>,
}

impl PricingAppState {
    pub fn new(tier_reader: Arc<dyn PricingTierReader>, catalog: Arc<PlanCatalog>) -> Self {
        Self {
            tier_reader,
            catalog,
        }
    }

    pub fn quote_handler(&self) -> QuoteChainPriceHandler {
        QuoteChainPriceHandler::new(self.tier_reader.clone(), self.catalog.clone())
    }

    pub fn list_tiers_handler(&self) -> ListPricingTiersHandler {
        ListPricingTiersHandler::new(self.tier_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/pricing/chain/quote - Price a plan for a number of locations
pub async fn get_chain_quote(
    State(state): State<PricingAppState>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<impl IntoResponse, PricingApiError> {
    let Query(params) = params.map_err(reject_query)?;

    let query = QuoteChainPriceQuery {
        plan_id: PlanId::new(&params.plan_id)?,
        currency: CurrencyCode::try_new(&params.currency)?,
        location_count: params.locations,
    };

    let quote = state.quote_handler().handle(query).await?;
    Ok(Json(QuoteResponse::from(quote)))
}

/// GET /api/pricing/chain/tiers - List a plan's tier schedule
pub async fn list_chain_tiers(
    State(state): State<PricingAppState>,
    params: Result<Query<TierListParams>, QueryRejection>,
) -> Result<impl IntoResponse, PricingApiError> {
    let Query(params) = params.map_err(reject_query)?;

    let plan_id = PlanId::new(&params.plan_id)?;
    let currency = CurrencyCode::try_new(&params.currency)?;

    let result = state
        .list_tiers_handler()
        .handle(ListPricingTiersQuery {
            plan_id: plan_id.clone(),
            currency: currency.clone(),
        })
        .await?;

    Ok(Json(TierListResponse::new(
        plan_id.to_string(),
        currency.to_string(),
        result,
    )))
}

fn reject_query(rejection: QueryRejection) -> PricingApiError {
    PricingApiError(PricingError::invalid_request("query", rejection.body_text()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts pricing errors to HTTP responses.
#[derive(Debug)]
pub struct PricingApiError(PricingError);

impl From<PricingError> for PricingApiError {
    fn from(err: PricingError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::ValidationError> for PricingApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(PricingError::from(err))
    }
}

impl IntoResponse for PricingApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PricingError::UnknownPlan { .. } => StatusCode::NOT_FOUND,
            PricingError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            PricingError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code().as_str(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}
