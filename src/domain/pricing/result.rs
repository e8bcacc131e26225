//! Pricing result types.

use serde::{Deserialize, Serialize};

/// What a breakdown line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// The plan's base price, covering the first location.
    Base,
    /// Locations priced by a per-location tier.
    Tier,
    /// Locations that fall in a custom tier and need a manual quote.
    Quote,
}

/// One line item of a pricing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Tier label shown to the customer.
    pub tier: String,
    /// Number of locations this line accounts for.
    pub locations: u64,
    /// Unit price. Zero on quote lines.
    pub price_per_location: f64,
    /// `locations * price_per_location`. Zero on quote lines.
    pub subtotal: f64,
    pub kind: LineKind,
}

/// Whether the total covers every requested location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PricingOutcome {
    /// Every requested location is included in the total.
    Priced,

    /// A custom tier was reached; the total excludes `locations` that must be
    /// quoted by sales.
    RequiresQuote { tier: String, locations: u64 },

    /// The tier schedule ran out before all locations were placed.
    Incomplete { uncovered_locations: u64 },
}

impl PricingOutcome {
    /// Returns the outcome's wire tag.
    pub fn status(&self) -> &'static str {
        match self {
            PricingOutcome::Priced => "priced",
            PricingOutcome::RequiresQuote { .. } => "requires_quote",
            PricingOutcome::Incomplete { .. } => "incomplete",
        }
    }
}

/// Total and itemised breakdown for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Base price plus every priced tier subtotal.
    pub total: f64,
    /// Base line first, then one line per consumed tier in rank order.
    pub breakdown: Vec<BreakdownLine>,
    pub outcome: PricingOutcome,
}

impl PricingResult {
    /// Returns true if every requested location is reflected in `total`.
    pub fn is_fully_priced(&self) -> bool {
        self.outcome == PricingOutcome::Priced
    }

    /// Returns true if part of the request must be quoted manually.
    pub fn requires_quote(&self) -> bool {
        matches!(self.outcome, PricingOutcome::RequiresQuote { .. })
    }

    /// Number of locations accounted for by the breakdown, base included.
    pub fn locations_accounted(&self) -> u64 {
        self.breakdown.iter().map(|line| line.locations).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_line() -> BreakdownLine {
        BreakdownLine {
            tier: "Base (1 location)".to_string(),
            locations: 1,
            price_per_location: 45.0,
            subtotal: 45.0,
            kind: LineKind::Base,
        }
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = PricingOutcome::RequiresQuote {
            tier: "11+".to_string(),
            locations: 6,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "requires_quote");
        assert_eq!(json["locations"], 6);
    }

    #[test]
    fn priced_outcome_serializes_as_bare_tag() {
        let json = serde_json::to_string(&PricingOutcome::Priced).unwrap();
        assert_eq!(json, r#"{"status":"priced"}"#);
    }

    #[test]
    fn status_matches_serde_tag() {
        let outcome = PricingOutcome::Incomplete {
            uncovered_locations: 3,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], outcome.status());
    }

    #[test]
    fn locations_accounted_sums_lines() {
        let result = PricingResult {
            total: 135.0,
            breakdown: vec![
                base_line(),
                BreakdownLine {
                    tier: "2-4 locations".to_string(),
                    locations: 3,
                    price_per_location: 30.0,
                    subtotal: 90.0,
                    kind: LineKind::Tier,
                },
            ],
            outcome: PricingOutcome::Priced,
        };
        assert_eq!(result.locations_accounted(), 4);
        assert!(result.is_fully_priced());
        assert!(!result.requires_quote());
    }

    #[test]
    fn line_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&LineKind::Quote).unwrap(), "\"quote\"");
    }
}
