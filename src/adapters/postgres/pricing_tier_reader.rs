//! PostgreSQL implementation of PricingTierReader.
//!
//! Reads tier rows from `chain_pricing_tiers` and validates each one into a
//! `PricingTier` before handing it to the domain.

use crate::domain::foundation::{CurrencyCode, DomainError, ErrorCode, PlanId, TierId};
use crate::domain::pricing::{PricingTier, PricingTierRecord};
use crate::ports::PricingTierReader;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PricingTierReader port.
pub struct PostgresPricingTierReader {
    pool: PgPool,
}

impl PostgresPricingTierReader {
    /// Creates a new PostgresPricingTierReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for tier schedule queries.
#[derive(Debug, sqlx::FromRow)]
struct PricingTierRow {
    id: Uuid,
    plan_id: String,
    currency: String,
    tier_label: String,
    tier_min: i32,
    tier_max: Option<i32>,
    price_per_location: f64,
    is_custom: bool,
}

impl TryFrom<PricingTierRow> for PricingTier {
    type Error = DomainError;

    fn try_from(row: PricingTierRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let record = PricingTierRecord {
            id: Some(TierId::from_uuid(row.id)),
            plan_id: row.plan_id,
            currency: row.currency,
            tier_label: row.tier_label,
            tier_min: i64::from(row.tier_min),
            tier_max: row.tier_max.map(i64::from),
            price_per_location: row.price_per_location,
            is_custom: row.is_custom,
        };

        PricingTier::try_from(record).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid pricing tier row {}: {}", id, e),
            )
        })
    }
}

#[async_trait]
impl PricingTierReader for PostgresPricingTierReader {
    async fn list_for_plan(
        &self,
        plan_id: &PlanId,
        currency: &CurrencyCode,
    ) -> Result<Vec<PricingTier>, DomainError> {
        let rows: Vec<PricingTierRow> = sqlx::query_as(
            r#"
            SELECT id, plan_id, currency, tier_label, tier_min, tier_max,
                   price_per_location::float8 AS price_per_location, is_custom
            FROM chain_pricing_tiers
            WHERE plan_id = $1 AND upper(currency) = $2
            ORDER BY tier_min
            "#,
        )
        .bind(plan_id.as_str())
        .bind(currency.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list pricing tiers: {}", e),
            )
        })?;

        rows.into_iter().map(PricingTier::try_from).collect()
    }
}
