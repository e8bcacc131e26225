//! Plan catalog - base prices per plan and currency.
//!
//! One catalog is loaded at startup and shared by every caller, so base
//! prices are declared in exactly one place.
//!
//! # File Format
//!
//! ```yaml
//! plans:
//!   - plan_id: chain
//!     currency: USD
//!     base_price: 45.0
//!     display_name: Chain
//! tiers:
//!   - plan_id: chain
//!     currency: USD
//!     tier_label: "2-4 locations"
//!     tier_min: 1
//!     tier_max: 3
//!     price_per_location: 30.0
//! ```
//!
//! `tiers` is optional; it seeds the in-memory tier reader when no database
//! is configured.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tier::{PricingTier, PricingTierRecord};
use crate::domain::foundation::{CurrencyCode, PlanId, ValidationError};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate base price for plan '{plan_id}' in {currency}")]
    DuplicatePlanPrice { plan_id: PlanId, currency: CurrencyCode },

    #[error("Invalid base price {price} for plan '{plan_id}' in {currency}")]
    InvalidBasePrice {
        plan_id: PlanId,
        currency: CurrencyCode,
        price: f64,
    },

    #[error("Invalid tier: {0}")]
    InvalidTier(#[from] ValidationError),
}

/// Base price of one plan in one currency. Covers exactly one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPrice {
    pub plan_id: PlanId,
    pub currency: CurrencyCode,
    pub base_price: f64,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Raw catalog file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub plans: Vec<PlanPrice>,
    #[serde(default)]
    pub tiers: Vec<PricingTierRecord>,
}

impl CatalogFile {
    /// Parses catalog YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Validates the file into a catalog and its tier rows.
    pub fn into_parts(self) -> Result<(PlanCatalog, Vec<PricingTier>), CatalogError> {
        let catalog = PlanCatalog::new(self.plans)?;
        let tiers = self
            .tiers
            .into_iter()
            .map(PricingTier::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((catalog, tiers))
    }
}

/// Base prices keyed by plan and currency.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    prices: BTreeMap<(PlanId, CurrencyCode), PlanPrice>,
}

impl PlanCatalog {
    /// Builds a catalog, rejecting duplicates and negative or non-finite prices.
    pub fn new(prices: Vec<PlanPrice>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for price in prices {
            if !price.base_price.is_finite() || price.base_price < 0.0 {
                return Err(CatalogError::InvalidBasePrice {
                    plan_id: price.plan_id,
                    currency: price.currency,
                    price: price.base_price,
                });
            }
            let key = (price.plan_id.clone(), price.currency.clone());
            if map.contains_key(&key) {
                return Err(CatalogError::DuplicatePlanPrice {
                    plan_id: price.plan_id,
                    currency: price.currency,
                });
            }
            map.insert(key, price);
        }
        Ok(Self { prices: map })
    }

    /// Returns the plan's price for the given currency.
    pub fn get(&self, plan_id: &PlanId, currency: &CurrencyCode) -> Option<&PlanPrice> {
        self.prices.get(&(plan_id.clone(), currency.clone()))
    }

    /// Returns the base price (one location included), if the plan is sold in `currency`.
    pub fn base_price(&self, plan_id: &PlanId, currency: &CurrencyCode) -> Option<f64> {
        self.get(plan_id, currency).map(|p| p.base_price)
    }

    /// Currencies the plan is priced in, sorted by code.
    pub fn currencies_for(&self, plan_id: &PlanId) -> Vec<&CurrencyCode> {
        self.prices
            .keys()
            .filter(|(plan, _)| plan == plan_id)
            .map(|(_, currency)| currency)
            .collect()
    }

    /// All plan prices, ordered by plan then currency.
    pub fn plans(&self) -> impl Iterator<Item = &PlanPrice> {
        self.prices.values()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
