//! Pricing tier reader port.
//!
//! Supplies the tier schedule for one plan and currency. Implementations
//! return rows in any order; consumers sort by `tier_min` themselves.
//!
//! # Example
//!
//! ```ignore
//! async fn quote(reader: &dyn PricingTierReader, plan: &PlanId, usd: &CurrencyCode) {
//!     let tiers = reader.list_for_plan(plan, usd).await.unwrap_or_default();
//!     let result = ChainPriceCalculator::calculate(45.0, 6, &tiers);
//! }
//! ```

use crate::domain::foundation::{CurrencyCode, DomainError, PlanId};
use crate::domain::pricing::PricingTier;
use async_trait::async_trait;

/// Reader port for pricing tiers.
#[async_trait]
pub trait PricingTierReader: Send + Sync {
    /// List every tier defined for the plan in the given currency.
    ///
    /// Returns an empty list when the plan has no additional-location pricing.
    async fn list_for_plan(
        &self,
        plan_id: &PlanId,
        currency: &CurrencyCode,
    ) -> Result<Vec<PricingTier>, DomainError>;
}
