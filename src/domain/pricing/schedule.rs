//! Consistency check for tier schedules.
//!
//! The calculator accepts any schedule. This check is for the people who
//! edit tiers: it reports the shapes that make the calculator's answer
//! surprising (gaps, overlaps, a missing first band, open-ended tiers
//! followed by more tiers, rows from different plans or currencies).

use serde::Serialize;

use super::tier::PricingTier;

/// A problem found in a tier schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ScheduleIssue {
    /// The lowest tier does not start at rank 1.
    DoesNotStartAtOne { first_min: u32 },

    /// Ranks between two consecutive tiers are not covered.
    Gap { after_max: u32, next_min: u32 },

    /// Two consecutive tiers claim the same ranks.
    Overlap { label: String, next_label: String },

    /// An open-ended tier is followed by another tier, which can never be reached.
    UnboundedBeforeEnd { label: String },

    /// Tiers from more than one plan were supplied together.
    MixedPlan,

    /// Tiers in more than one currency were supplied together.
    MixedCurrency,
}

impl std::fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleIssue::DoesNotStartAtOne { first_min } => {
                write!(f, "first tier starts at rank {} instead of 1", first_min)
            }
            ScheduleIssue::Gap {
                after_max,
                next_min,
            } => write!(f, "ranks {}-{} are not covered", after_max + 1, next_min - 1),
            ScheduleIssue::Overlap { label, next_label } => {
                write!(f, "tier '{}' overlaps tier '{}'", label, next_label)
            }
            ScheduleIssue::UnboundedBeforeEnd { label } => {
                write!(f, "open-ended tier '{}' is not the last tier", label)
            }
            ScheduleIssue::MixedPlan => write!(f, "tiers belong to more than one plan"),
            ScheduleIssue::MixedCurrency => write!(f, "tiers use more than one currency"),
        }
    }
}

/// Returns every issue found in `tiers`, in rank order. Empty input is valid.
pub fn check_schedule(tiers: &[PricingTier]) -> Vec<ScheduleIssue> {
    let mut issues = Vec::new();

    let Some(first) = tiers.first() else {
        return issues;
    };

    if tiers.iter().any(|t| t.plan_id() != first.plan_id()) {
        issues.push(ScheduleIssue::MixedPlan);
    }
    if tiers.iter().any(|t| t.currency() != first.currency()) {
        issues.push(ScheduleIssue::MixedCurrency);
    }

    let mut sorted: Vec<&PricingTier> = tiers.iter().collect();
    sorted.sort_by_key(|t| t.tier_min());

    if sorted[0].tier_min() != 1 {
        issues.push(ScheduleIssue::DoesNotStartAtOne {
            first_min: sorted[0].tier_min(),
        });
    }

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        match current.tier_max() {
            None => issues.push(ScheduleIssue::UnboundedBeforeEnd {
                label: current.tier_label().to_string(),
            }),
            Some(max) if next.tier_min() <= max => issues.push(ScheduleIssue::Overlap {
                label: current.tier_label().to_string(),
                next_label: next.tier_label().to_string(),
            }),
            Some(max) if u64::from(next.tier_min()) > u64::from(max) + 1 => {
                issues.push(ScheduleIssue::Gap {
                    after_max: max,
                    next_min: next.tier_min(),
                })
            }
            Some(_) => {}
        }
    }

    issues
}
