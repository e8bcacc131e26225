//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, currency, errors)
//! - `pricing` - Tier schedules, the chain price calculator, and the plan catalog

pub mod foundation;
pub mod pricing;
