//! Pricing-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UnknownPlan | 404 |
//! | InvalidRequest | 400 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{CurrencyCode, DomainError, ErrorCode, PlanId, ValidationError};

/// Errors returned by pricing handlers.
///
/// The calculator itself never fails; these cover plan lookup, request
/// validation, and tier retrieval.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// No base price is configured for the plan in this currency.
    #[error("Plan '{plan_id}' has no price in {currency}")]
    UnknownPlan {
        plan_id: PlanId,
        currency: CurrencyCode,
    },

    /// The request could not be interpreted.
    #[error("Invalid {field}: {message}")]
    InvalidRequest { field: String, message: String },

    /// Tier storage could not be read.
    #[error("Pricing data unavailable: {0}")]
    Infrastructure(String),
}

impl PricingError {
    pub fn unknown_plan(plan_id: PlanId, currency: CurrencyCode) -> Self {
        PricingError::UnknownPlan { plan_id, currency }
    }

    pub fn invalid_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        PricingError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PricingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::UnknownPlan { .. } => ErrorCode::PlanNotFound,
            PricingError::InvalidRequest { .. } => ErrorCode::ValidationFailed,
            PricingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for PricingError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        PricingError::InvalidRequest {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PricingError {
    fn from(err: DomainError) -> Self {
        PricingError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_plan_maps_to_plan_not_found() {
        let err = PricingError::unknown_plan(
            PlanId::new("solo").unwrap(),
            CurrencyCode::try_new("USD").unwrap(),
        );
        assert_eq!(err.code(), ErrorCode::PlanNotFound);
        assert_eq!(err.to_string(), "Plan 'solo' has no price in USD");
    }

    #[test]
    fn validation_error_becomes_invalid_request() {
        let err: PricingError = ValidationError::empty_field("plan_id").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(matches!(err, PricingError::InvalidRequest { ref field, .. } if field == "plan_id"));
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: PricingError = DomainError::database("timeout").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.to_string(), "Pricing data unavailable: [DATABASE_ERROR] timeout");
    }
}
