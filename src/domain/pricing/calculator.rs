//! Chain Price Calculator - Prices additional locations across a tier schedule.

use super::result::{BreakdownLine, LineKind, PricingOutcome, PricingResult};
use super::tier::PricingTier;

/// Label of the synthesized first breakdown line.
pub const BASE_LINE_LABEL: &str = "Base (1 location)";

/// Calculator for multi-location subscription totals.
pub struct ChainPriceCalculator;

impl ChainPriceCalculator {
    /// Computes the total price for `location_count` locations.
    ///
    /// The base price always covers the first location. The remaining
    /// `location_count - 1` locations are distributed over `tiers` in
    /// ascending `tier_min` order, regardless of the order they are passed in.
    ///
    /// # Edge Cases
    /// - `location_count <= 1`: base line only, no tiers consulted
    /// - Custom tier reached: it absorbs every remaining location at zero
    ///   cost and no later tier is consulted
    /// - Schedule too short: leftover locations are left out of the total and
    ///   reported as `PricingOutcome::Incomplete`
    ///
    /// Amounts are not rounded; see [`super::format_amount`] for display.
    pub fn calculate(base_price: f64, location_count: i64, tiers: &[PricingTier]) -> PricingResult {
        let mut total = base_price;
        let mut breakdown = vec![BreakdownLine {
            tier: BASE_LINE_LABEL.to_string(),
            locations: 1,
            price_per_location: base_price,
            subtotal: base_price,
            kind: LineKind::Base,
        }];

        if location_count <= 1 {
            return PricingResult {
                total,
                breakdown,
                outcome: PricingOutcome::Priced,
            };
        }

        let mut remaining = location_count.unsigned_abs() - 1;

        let mut sorted: Vec<&PricingTier> = tiers.iter().collect();
        sorted.sort_by_key(|tier| tier.tier_min());

        for tier in sorted {
            if remaining == 0 {
                break;
            }

            if tier.is_custom() {
                breakdown.push(BreakdownLine {
                    tier: tier.tier_label().to_string(),
                    locations: remaining,
                    price_per_location: 0.0,
                    subtotal: 0.0,
                    kind: LineKind::Quote,
                });
                return PricingResult {
                    total,
                    breakdown,
                    outcome: PricingOutcome::RequiresQuote {
                        tier: tier.tier_label().to_string(),
                        locations: remaining,
                    },
                };
            }

            let in_tier = tier
                .capacity()
                .map_or(remaining, |capacity| remaining.min(capacity));
            let price = tier.price_per_location();
            let subtotal = in_tier as f64 * price;

            total += subtotal;
            breakdown.push(BreakdownLine {
                tier: tier.tier_label().to_string(),
                locations: in_tier,
                price_per_location: price,
                subtotal,
                kind: LineKind::Tier,
            });
            remaining -= in_tier;
        }

        let outcome = if remaining > 0 {
            PricingOutcome::Incomplete {
                uncovered_locations: remaining,
            }
        } else {
            PricingOutcome::Priced
        };

        PricingResult {
            total,
            breakdown,
            outcome,
        }
    }
}
