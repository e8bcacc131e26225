//! Pricing tier definitions.
//!
//! A tier covers a contiguous, inclusive range of *additional* location ranks
//! for one plan and currency. Rank 1 is the second location overall; the
//! first location is always covered by the plan's base price.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurrencyCode, PlanId, TierId, ValidationError};

/// How locations within a tier are priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum TierPricing {
    /// Flat price charged for each location in the tier.
    PerLocation(f64),

    /// Price is negotiated manually ("contact us").
    Custom,
}

/// One band of additional-location pricing.
///
/// Construct through [`PricingTier::try_new`] or from a [`PricingTierRecord`];
/// both enforce `tier_min >= 1`, `tier_max >= tier_min`, and a finite,
/// non-negative per-location price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingTier {
    id: TierId,
    plan_id: PlanId,
    currency: CurrencyCode,
    tier_label: String,
    tier_min: u32,
    tier_max: Option<u32>,
    pricing: TierPricing,
}

impl PricingTier {
    /// Creates a validated tier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - the label is empty
    /// - `tier_min` is zero
    /// - `tier_max` is below `tier_min`
    /// - the per-location price is negative, NaN, or infinite
    pub fn try_new(
        id: TierId,
        plan_id: PlanId,
        currency: CurrencyCode,
        tier_label: impl Into<String>,
        tier_min: u32,
        tier_max: Option<u32>,
        pricing: TierPricing,
    ) -> Result<Self, ValidationError> {
        let tier_label = tier_label.into();
        if tier_label.trim().is_empty() {
            return Err(ValidationError::empty_field("tier_label"));
        }

        if tier_min == 0 {
            return Err(ValidationError::out_of_range(
                "tier_min",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }

        if let Some(max) = tier_max {
            if max < tier_min {
                return Err(ValidationError::out_of_range(
                    "tier_max",
                    i64::from(tier_min),
                    i64::from(u32::MAX),
                    i64::from(max),
                ));
            }
        }

        if let TierPricing::PerLocation(price) = pricing {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::invalid_format(
                    "price_per_location",
                    format!("must be a finite, non-negative amount, got {}", price),
                ));
            }
        }

        Ok(Self {
            id,
            plan_id,
            currency,
            tier_label,
            tier_min,
            tier_max,
            pricing,
        })
    }

    pub fn id(&self) -> TierId {
        self.id
    }

    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn tier_label(&self) -> &str {
        &self.tier_label
    }

    pub fn tier_min(&self) -> u32 {
        self.tier_min
    }

    pub fn tier_max(&self) -> Option<u32> {
        self.tier_max
    }

    pub fn pricing(&self) -> TierPricing {
        self.pricing
    }

    /// Returns true if this tier must be quoted manually.
    pub fn is_custom(&self) -> bool {
        matches!(self.pricing, TierPricing::Custom)
    }

    /// Returns the per-location price, or zero for custom tiers.
    pub fn price_per_location(&self) -> f64 {
        match self.pricing {
            TierPricing::PerLocation(price) => price,
            TierPricing::Custom => 0.0,
        }
    }

    /// Number of ranks this tier can hold. `None` means unbounded.
    pub fn capacity(&self) -> Option<u64> {
        self.tier_max
            .map(|max| u64::from(max) - u64::from(self.tier_min) + 1)
    }

    /// Returns true if the given additional-location rank falls in this tier.
    pub fn covers(&self, rank: u32) -> bool {
        rank >= self.tier_min && self.tier_max.map_or(true, |max| rank <= max)
    }
}

/// Flat record shape of a tier, as stored in the tier table and catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTierRecord {
    #[serde(default)]
    pub id: Option<TierId>,
    pub plan_id: String,
    pub currency: String,
    pub tier_label: String,
    pub tier_min: i64,
    #[serde(default)]
    pub tier_max: Option<i64>,
    #[serde(default)]
    pub price_per_location: f64,
    #[serde(default)]
    pub is_custom: bool,
}

fn rank_from_i64(field: &str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .map_err(|_| ValidationError::out_of_range(field, 1, i64::from(u32::MAX), value))
}

impl TryFrom<PricingTierRecord> for PricingTier {
    type Error = ValidationError;

    fn try_from(record: PricingTierRecord) -> Result<Self, Self::Error> {
        let plan_id = PlanId::new(record.plan_id)?;
        let currency = CurrencyCode::try_new(&record.currency)?;
        let tier_min = rank_from_i64("tier_min", record.tier_min)?;
        let tier_max = record
            .tier_max
            .map(|max| rank_from_i64("tier_max", max))
            .transpose()?;
        let pricing = if record.is_custom {
            TierPricing::Custom
        } else {
            TierPricing::PerLocation(record.price_per_location)
        };

        PricingTier::try_new(
            record.id.unwrap_or_default(),
            plan_id,
            currency,
            record.tier_label,
            tier_min,
            tier_max,
            pricing,
        )
    }
}

impl From<&PricingTier> for PricingTierRecord {
    fn from(tier: &PricingTier) -> Self {
        Self {
            id: Some(tier.id),
            plan_id: tier.plan_id.to_string(),
            currency: tier.currency.to_string(),
            tier_label: tier.tier_label.clone(),
            tier_min: i64::from(tier.tier_min),
            tier_max: tier.tier_max.map(i64::from),
            price_per_location: tier.price_per_location(),
            is_custom: tier.is_custom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> PlanId {
        PlanId::new("chain").unwrap()
    }

    fn usd() -> CurrencyCode {
        CurrencyCode::try_new("USD").unwrap()
    }

    fn tier(min: u32, max: Option<u32>, pricing: TierPricing) -> Result<PricingTier, ValidationError> {
        PricingTier::try_new(TierId::new(), chain(), usd(), "band", min, max, pricing)
    }

    #[test]
    fn bounded_tier_capacity() {
        let t = tier(4, Some(10), TierPricing::PerLocation(20.0)).unwrap();
        assert_eq!(t.capacity(), Some(7));
    }

    #[test]
    fn single_rank_tier_has_capacity_one() {
        let t = tier(3, Some(3), TierPricing::PerLocation(20.0)).unwrap();
        assert_eq!(t.capacity(), Some(1));
    }

    #[test]
    fn unbounded_tier_has_no_capacity_limit() {
        let t = tier(11, None, TierPricing::PerLocation(10.0)).unwrap();
        assert_eq!(t.capacity(), None);
        assert!(t.covers(u32::MAX));
    }

    #[test]
    fn covers_is_inclusive() {
        let t = tier(1, Some(3), TierPricing::PerLocation(30.0)).unwrap();
        assert!(!t.covers(0));
        assert!(t.covers(1));
        assert!(t.covers(3));
        assert!(!t.covers(4));
    }

    #[test]
    fn custom_tier_reports_zero_price() {
        let t = tier(4, None, TierPricing::Custom).unwrap();
        assert!(t.is_custom());
        assert_eq!(t.price_per_location(), 0.0);
    }

    #[test]
    fn rejects_zero_tier_min() {
        let err = tier(0, Some(3), TierPricing::PerLocation(30.0)).unwrap_err();
        assert_eq!(err.field(), "tier_min");
    }

    #[test]
    fn rejects_max_below_min() {
        let err = tier(5, Some(4), TierPricing::PerLocation(30.0)).unwrap_err();
        assert_eq!(err.field(), "tier_max");
    }

    #[test]
    fn rejects_negative_and_nan_prices() {
        assert!(tier(1, None, TierPricing::PerLocation(-1.0)).is_err());
        assert!(tier(1, None, TierPricing::PerLocation(f64::NAN)).is_err());
        assert!(tier(1, None, TierPricing::PerLocation(f64::INFINITY)).is_err());
    }

    #[test]
    fn rejects_blank_label() {
        let err = PricingTier::try_new(
            TierId::new(),
            chain(),
            usd(),
            "  ",
            1,
            None,
            TierPricing::Custom,
        )
        .unwrap_err();
        assert_eq!(err.field(), "tier_label");
    }

    #[test]
    fn record_with_custom_flag_ignores_price() {
        let record = PricingTierRecord {
            id: None,
            plan_id: "chain".to_string(),
            currency: "usd".to_string(),
            tier_label: "11+".to_string(),
            tier_min: 10,
            tier_max: None,
            price_per_location: 99.0,
            is_custom: true,
        };
        let t = PricingTier::try_from(record).unwrap();
        assert!(t.is_custom());
        assert_eq!(t.currency().as_str(), "USD");
    }

    #[test]
    fn record_with_negative_rank_is_rejected() {
        let record = PricingTierRecord {
            id: None,
            plan_id: "chain".to_string(),
            currency: "USD".to_string(),
            tier_label: "2-3 locations".to_string(),
            tier_min: -1,
            tier_max: Some(2),
            price_per_location: 30.0,
            is_custom: false,
        };
        assert!(PricingTier::try_from(record).is_err());
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let yaml = "plan_id: chain\ncurrency: EUR\ntier_label: \"11+\"\ntier_min: 10\nis_custom: true\n";
        let record: PricingTierRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.tier_max, None);
        assert_eq!(record.price_per_location, 0.0);
        assert!(PricingTier::try_from(record).is_ok());
    }
}
