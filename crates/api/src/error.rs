// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use pressrun::PricingError;
use pressrun_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from engine and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A pricing rule rejected the request.
    BusinessRuleRejection {
        /// The rule that rejected it.
        rule: String,
        /// A human-readable description of the rejection.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::BusinessRuleRejection { rule, message } => {
                write!(f, "Rejected by rule '{rule}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates an engine error into an API error.
///
/// This translation is explicit and ensures engine errors are not leaked
/// directly.
#[must_use]
pub fn translate_pricing_error(err: PricingError) -> ApiError {
    match err {
        PricingError::UnknownBookSize { book_size } => ApiError::ResourceNotFound {
            resource_type: String::from("Book size"),
            message: format!("No pricing is configured for book size '{book_size}'"),
        },
        PricingError::ForbiddenCombination { field, value } => ApiError::BusinessRuleRejection {
            rule: String::from("forbidden_combination"),
            message: format!("'{value}' is not available for {field} with this selection"),
        },
        PricingError::UnpricedCombination {
            paper_type,
            weight,
            print_type,
        } => ApiError::BusinessRuleRejection {
            rule: String::from("unpriced_combination"),
            message: format!(
                "No {print_type} price is configured for paper '{paper_type}' at weight {weight}"
            ),
        },
        PricingError::UnpricedBinding { binding_type } => ApiError::BusinessRuleRejection {
            rule: String::from("unpriced_binding"),
            message: format!("No price is configured for binding '{binding_type}'"),
        },
        PricingError::InvalidExtraConfig { extra_name } => ApiError::Internal {
            message: format!("Extra service '{extra_name}' is misconfigured"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures are internal; a corrupt stored document is internal
/// too, because the caller cannot fix it from the request side.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}
