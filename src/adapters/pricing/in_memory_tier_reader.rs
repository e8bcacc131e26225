//! In-Memory Pricing Tier Reader
//!
//! Holds tier schedules in memory, grouped by plan and currency.
//! Seeded from the catalog file when no database is configured, and used in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CurrencyCode, DomainError, PlanId};
use crate::domain::pricing::PricingTier;
use crate::ports::PricingTierReader;

type ScheduleKey = (PlanId, CurrencyCode);

/// In-memory storage for pricing tiers
#[derive(Debug, Clone, Default)]
pub struct InMemoryPricingTierReader {
    schedules: Arc<RwLock<HashMap<ScheduleKey, Vec<PricingTier>>>>,
}

impl InMemoryPricingTierReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader holding the given tiers
    pub fn with_tiers(tiers: impl IntoIterator<Item = PricingTier>) -> Self {
        let mut schedules: HashMap<ScheduleKey, Vec<PricingTier>> = HashMap::new();
        for tier in tiers {
            schedules
                .entry((tier.plan_id().clone(), tier.currency().clone()))
                .or_default()
                .push(tier);
        }
        Self {
            schedules: Arc::new(RwLock::new(schedules)),
        }
    }

    /// Replace the schedule for one plan and currency
    pub async fn replace(&self, plan_id: PlanId, currency: CurrencyCode, tiers: Vec<PricingTier>) {
        self.schedules
            .write()
            .await
            .insert((plan_id, currency), tiers);
    }

    /// Total number of stored tiers
    pub async fn tier_count(&self) -> usize {
        self.schedules.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl PricingTierReader for InMemoryPricingTierReader {
    async fn list_for_plan(
        &self,
        plan_id: &PlanId,
        currency: &CurrencyCode,
    ) -> Result<Vec<PricingTier>, DomainError> {
        let schedules = self.schedules.read().await;
        Ok(schedules
            .get(&(plan_id.clone(), currency.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TierId;
    use crate::domain::pricing::TierPricing;

    fn tier(plan: &str, currency: &str, min: u32) -> PricingTier {
        PricingTier::try_new(
            TierId::new(),
            PlanId::new(plan).unwrap(),
            CurrencyCode::try_new(currency).unwrap(),
            format!("from {}", min),
            min,
            None,
            TierPricing::PerLocation(10.0),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn groups_tiers_by_plan_and_currency() {
        let reader = InMemoryPricingTierReader::with_tiers(vec![
            tier("chain", "USD", 1),
            tier("chain", "EUR", 1),
            tier("chain", "USD", 4),
        ]);

        let usd = reader
            .list_for_plan(
                &PlanId::new("chain").unwrap(),
                &CurrencyCode::try_new("USD").unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(usd.len(), 2);
        assert_eq!(reader.tier_count().await, 3);
    }

    #[tokio::test]
    async fn unknown_plan_returns_empty_schedule() {
        let reader = InMemoryPricingTierReader::new();
        let tiers = reader
            .list_for_plan(
                &PlanId::new("chain").unwrap(),
                &CurrencyCode::try_new("USD").unwrap(),
            )
            .await
            .unwrap();
        assert!(tiers.is_empty());
    }

    #[tokio::test]
    async fn replace_swaps_a_schedule() {
        let reader = InMemoryPricingTierReader::with_tiers(vec![tier("chain", "USD", 1)]);
        let plan = PlanId::new("chain").unwrap();
        let usd = CurrencyCode::try_new("USD").unwrap();

        reader
            .replace(plan.clone(), usd.clone(), vec![tier("chain", "USD", 1), tier("chain", "USD", 5)])
            .await;

        assert_eq!(reader.list_for_plan(&plan, &usd).await.unwrap().len(), 2);
    }
}
