//! QuoteChainPriceHandler - Query handler for multi-location subscription quotes.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::{CurrencyCode, PlanId};
use crate::domain::pricing::{
    check_schedule, ChainPriceCalculator, PlanCatalog, PricingError, PricingResult,
};
use crate::ports::PricingTierReader;

/// Query to price a plan for a number of locations.
#[derive(Debug, Clone)]
pub struct QuoteChainPriceQuery {
    pub plan_id: PlanId,
    pub currency: CurrencyCode,
    /// Total locations requested, first location included.
    pub location_count: i64,
}

/// Result of a successful quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainQuote {
    pub plan_id: PlanId,
    pub currency: CurrencyCode,
    pub location_count: i64,
    pub base_price: f64,
    pub result: PricingResult,
    /// True when tier data could not be loaded and the quote fell back to base-only.
    pub degraded: bool,
}

/// Handler for chain price quotes.
///
/// Tier retrieval failures do not fail the quote: the handler logs the
/// failure and prices with an empty schedule, which yields the base price only.
pub struct QuoteChainPriceHandler {
    reader: Arc<dyn PricingTierReader>,
    catalog: Arc<PlanCatalog>,
}

impl QuoteChainPriceHandler {
    pub fn new(reader: Arc<dyn PricingTierReader>, catalog: Arc<PlanCatalog>) -> Self {
        Self { reader, catalog }
    }

    pub async fn handle(&self, query: QuoteChainPriceQuery) -> Result<ChainQuote, PricingError> {
        let base_price = self
            .catalog
            .base_price(&query.plan_id, &query.currency)
            .ok_or_else(|| {
                PricingError::unknown_plan(query.plan_id.clone(), query.currency.clone())
            })?;

        let (tiers, degraded) = match self
            .reader
            .list_for_plan(&query.plan_id, &query.currency)
            .await
        {
            Ok(tiers) => (tiers, false),
            Err(e) => {
                warn!(
                    plan_id = %query.plan_id,
                    currency = %query.currency,
                    error = %e,
                    "Failed to load pricing tiers, quoting base price only"
                );
                (Vec::new(), true)
            }
        };

        for issue in check_schedule(&tiers) {
            warn!(
                plan_id = %query.plan_id,
                currency = %query.currency,
                %issue,
                "Pricing tier schedule is inconsistent"
            );
        }

        let result = ChainPriceCalculator::calculate(base_price, query.location_count, &tiers);

        debug!(
            plan_id = %query.plan_id,
            currency = %query.currency,
            locations = query.location_count,
            total = result.total,
            outcome = result.outcome.status(),
            "Computed chain quote"
        );

        Ok(ChainQuote {
            plan_id: query.plan_id,
            currency: query.currency,
            location_count: query.location_count,
            base_price,
            result,
            degraded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, TierId};
    use crate::domain::pricing::{LineKind, PlanPrice, PricingOutcome, PricingTier, TierPricing};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockTierReader {
        tiers: Vec<PricingTier>,
        fail_read: bool,
    }

    impl MockTierReader {
        fn with_tiers(tiers: Vec<PricingTier>) -> Self {
            Self {
                tiers,
                fail_read: false,
            }
        }

        fn failing() -> Self {
            Self {
                tiers: Vec::new(),
                fail_read: true,
            }
        }
    }

    #[async_trait]
    impl PricingTierReader for MockTierReader {
        async fn list_for_plan(
            &self,
            plan_id: &PlanId,
            currency: &CurrencyCode,
        ) -> Result<Vec<PricingTier>, DomainError> {
            if self.fail_read {
                return Err(DomainError::database("Simulated read failure"));
            }
            Ok(self
                .tiers
                .iter()
                .filter(|t| t.plan_id() == plan_id && t.currency() == currency)
                .cloned()
                .collect())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn chain() -> PlanId {
        PlanId::new("chain").unwrap()
    }

    fn usd() -> CurrencyCode {
        CurrencyCode::try_new("USD").unwrap()
    }

    fn catalog() -> Arc<PlanCatalog> {
        Arc::new(
            PlanCatalog::new(vec![PlanPrice {
                plan_id: chain(),
                currency: usd(),
                base_price: 45.0,
                display_name: Some("Chain".to_string()),
            }])
            .unwrap(),
        )
    }

    fn tier(label: &str, min: u32, max: Option<u32>, pricing: TierPricing) -> PricingTier {
        PricingTier::try_new(TierId::new(), chain(), usd(), label, min, max, pricing).unwrap()
    }

    fn schedule() -> Vec<PricingTier> {
        vec![
            tier("2-4 locations", 1, Some(3), TierPricing::PerLocation(30.0)),
            tier("5+ locations", 4, None, TierPricing::Custom),
        ]
    }

    fn query(count: i64) -> QuoteChainPriceQuery {
        QuoteChainPriceQuery {
            plan_id: chain(),
            currency: usd(),
            location_count: count,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn quotes_within_priced_tiers() {
        let reader = Arc::new(MockTierReader::with_tiers(schedule()));
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let quote = handler.handle(query(3)).await.unwrap();

        assert_eq!(quote.base_price, 45.0);
        assert_eq!(quote.result.total, 105.0);
        assert_eq!(quote.result.outcome, PricingOutcome::Priced);
        assert!(!quote.degraded);
    }

    #[tokio::test]
    async fn quote_reaching_custom_tier_requires_quote() {
        let reader = Arc::new(MockTierReader::with_tiers(schedule()));
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let quote = handler.handle(query(10)).await.unwrap();

        assert_eq!(quote.result.total, 135.0);
        assert!(quote.result.requires_quote());
        assert_eq!(quote.result.breakdown.last().unwrap().kind, LineKind::Quote);
    }

    #[tokio::test]
    async fn tiers_for_other_currencies_are_ignored() {
        let eur_tier = PricingTier::try_new(
            TierId::new(),
            chain(),
            CurrencyCode::try_new("EUR").unwrap(),
            "2+ locations",
            1,
            None,
            TierPricing::PerLocation(1.0),
        )
        .unwrap();
        let reader = Arc::new(MockTierReader::with_tiers(vec![eur_tier]));
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let quote = handler.handle(query(5)).await.unwrap();

        assert_eq!(quote.result.total, 45.0);
        assert_eq!(
            quote.result.outcome,
            PricingOutcome::Incomplete {
                uncovered_locations: 4
            }
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Degraded / Error Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn reader_failure_falls_back_to_base_price() {
        let reader = Arc::new(MockTierReader::failing());
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let quote = handler.handle(query(10)).await.unwrap();

        assert!(quote.degraded);
        assert_eq!(quote.result.total, 45.0);
        assert_eq!(quote.result.breakdown.len(), 1);
    }

    #[tokio::test]
    async fn unknown_plan_is_an_error() {
        let reader = Arc::new(MockTierReader::with_tiers(schedule()));
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let result = handler
            .handle(QuoteChainPriceQuery {
                plan_id: PlanId::new("solo").unwrap(),
                currency: usd(),
                location_count: 2,
            })
            .await;

        assert!(matches!(result, Err(PricingError::UnknownPlan { .. })));
    }

    #[tokio::test]
    async fn unsupported_currency_is_an_error() {
        let reader = Arc::new(MockTierReader::with_tiers(schedule()));
        let handler = QuoteChainPriceHandler::new(reader, catalog());

        let result = handler
            .handle(QuoteChainPriceQuery {
                plan_id: chain(),
                currency: CurrencyCode::try_new("JPY").unwrap(),
                location_count: 2,
            })
            .await;

        assert!(matches!(result, Err(PricingError::UnknownPlan { .. })));
    }
}
