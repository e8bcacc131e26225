//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the pricing domain.

mod currency;
mod errors;
mod ids;

pub use currency::CurrencyCode;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PlanId, TierId};
