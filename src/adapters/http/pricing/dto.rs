//! Data Transfer Objects for pricing HTTP endpoints.
//!
//! Amounts are carried at full precision and alongside a display string
//! rounded to cents for the request currency.

use serde::{Deserialize, Serialize};

use crate::application::handlers::pricing::{ChainQuote, ListPricingTiersResult};
use crate::domain::foundation::CurrencyCode;
use crate::domain::pricing::{
    format_amount, BreakdownLine, LineKind, PricingOutcome, PricingTier, TierPricing,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string for `GET /chain/quote`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteParams {
    pub plan_id: String,
    pub currency: String,
    pub locations: i64,
}

/// Query string for `GET /chain/tiers`.
#[derive(Debug, Clone, Deserialize)]
pub struct TierListParams {
    pub plan_id: String,
    pub currency: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a chain price quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub plan_id: String,
    pub currency: String,
    pub location_count: i64,
    pub base_price: f64,
    pub total: f64,
    /// Total rounded and formatted for display, e.g. `"$175.00"`.
    pub total_display: String,
    pub breakdown: Vec<BreakdownLineResponse>,
    pub outcome: PricingOutcome,
    /// Set when tier data was unavailable and only the base price was applied.
    pub degraded: bool,
}

impl From<ChainQuote> for QuoteResponse {
    fn from(quote: ChainQuote) -> Self {
        let currency = quote.currency;
        let breakdown = quote
            .result
            .breakdown
            .iter()
            .map(|line| BreakdownLineResponse::from_line(line, &currency))
            .collect();

        Self {
            plan_id: quote.plan_id.to_string(),
            total_display: format_amount(quote.result.total, &currency),
            currency: currency.to_string(),
            location_count: quote.location_count,
            base_price: quote.base_price,
            total: quote.result.total,
            breakdown,
            outcome: quote.result.outcome,
            degraded: quote.degraded,
        }
    }
}

/// One breakdown line as rendered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownLineResponse {
    pub tier: String,
    pub locations: u64,
    pub price_per_location: f64,
    pub subtotal: f64,
    /// Absent on quote lines, which carry no price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_display: Option<String>,
    pub kind: LineKind,
}

impl BreakdownLineResponse {
    fn from_line(line: &BreakdownLine, currency: &CurrencyCode) -> Self {
        let subtotal_display = match line.kind {
            LineKind::Quote => None,
            LineKind::Base | LineKind::Tier => Some(format_amount(line.subtotal, currency)),
        };

        Self {
            tier: line.tier.clone(),
            locations: line.locations,
            price_per_location: line.price_per_location,
            subtotal: line.subtotal,
            subtotal_display,
            kind: line.kind,
        }
    }
}

/// One tier of a plan's schedule.
#[derive(Debug, Clone, Serialize)]
pub struct TierResponse {
    pub id: String,
    pub tier_label: String,
    pub tier_min: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_max: Option<u32>,
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_location: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_display: Option<String>,
}

impl From<&PricingTier> for TierResponse {
    fn from(tier: &PricingTier) -> Self {
        let (price_per_location, price_display) = match tier.pricing() {
            TierPricing::PerLocation(price) => {
                (Some(price), Some(format_amount(price, tier.currency())))
            }
            TierPricing::Custom => (None, None),
        };

        Self {
            id: tier.id().to_string(),
            tier_label: tier.tier_label().to_string(),
            tier_min: tier.tier_min(),
            tier_max: tier.tier_max(),
            is_custom: tier.is_custom(),
            price_per_location,
            price_display,
        }
    }
}

/// Response for a tier schedule listing.
#[derive(Debug, Clone, Serialize)]
pub struct TierListResponse {
    pub plan_id: String,
    pub currency: String,
    pub tiers: Vec<TierResponse>,
    /// Human-readable schedule problems; empty for a well-formed schedule.
    pub issues: Vec<String>,
}

impl TierListResponse {
    pub fn new(plan_id: String, currency: String, result: ListPricingTiersResult) -> Self {
        Self {
            plan_id,
            currency,
            tiers: result.tiers.iter().map(TierResponse::from).collect(),
            issues: result.issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
