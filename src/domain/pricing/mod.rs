//! Pricing domain module.
//!
//! Prices multi-location ("chain") subscriptions. The plan's base price covers
//! the first location; every additional location is priced by walking an
//! ordered schedule of tiers.
//!
//! # Module Structure
//!
//! - `tier` - PricingTier record and its validated construction
//! - `result` - PricingResult, breakdown lines, and the explicit outcome
//! - `calculator` - ChainPriceCalculator (pure, stateless)
//! - `schedule` - Consistency check for tier schedules
//! - `catalog` - PlanCatalog of base prices per plan and currency
//! - `format` - Display-boundary currency formatting
//! - `errors` - PricingError

mod calculator;
mod catalog;
mod errors;
mod format;
mod result;
mod schedule;
mod tier;

pub use calculator::{ChainPriceCalculator, BASE_LINE_LABEL};
pub use catalog::{CatalogError, CatalogFile, PlanCatalog, PlanPrice};
pub use errors::PricingError;
pub use format::{format_amount, round_to_cents};
pub use result::{BreakdownLine, LineKind, PricingOutcome, PricingResult};
pub use schedule::{check_schedule, ScheduleIssue};
pub use tier::{PricingTier, PricingTierRecord, TierPricing};
