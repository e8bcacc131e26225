//! ListPricingTiersHandler - Query handler for a plan's tier schedule.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{CurrencyCode, PlanId};
use crate::domain::pricing::{check_schedule, PricingError, PricingTier, ScheduleIssue};
use crate::ports::PricingTierReader;

/// Query to list tiers for a plan and currency.
#[derive(Debug, Clone)]
pub struct ListPricingTiersQuery {
    pub plan_id: PlanId,
    pub currency: CurrencyCode,
}

/// Tiers sorted by `tier_min`, plus any schedule problems found.
#[derive(Debug, Clone)]
pub struct ListPricingTiersResult {
    pub tiers: Vec<PricingTier>,
    pub issues: Vec<ScheduleIssue>,
}

/// Handler for listing tier schedules.
///
/// Unlike quoting, a failed read is reported to the caller: a pricing table
/// cannot be rendered from an empty substitute.
pub struct ListPricingTiersHandler {
    reader: Arc<dyn PricingTierReader>,
}

impl ListPricingTiersHandler {
    pub fn new(reader: Arc<dyn PricingTierReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListPricingTiersQuery,
    ) -> Result<ListPricingTiersResult, PricingError> {
        let mut tiers = self
            .reader
            .list_for_plan(&query.plan_id, &query.currency)
            .await
            .map_err(|e| {
                warn!(
                    plan_id = %query.plan_id,
                    currency = %query.currency,
                    error = %e,
                    "Failed to load pricing tiers"
                );
                PricingError::infrastructure(e.to_string())
            })?;

        tiers.sort_by_key(|t| t.tier_min());
        let issues = check_schedule(&tiers);

        Ok(ListPricingTiersResult { tiers, issues })
    }
}
