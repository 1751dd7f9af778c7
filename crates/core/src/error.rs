// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Structured rejections from the pricing pipeline.
///
/// Every variant is recoverable and reportable: the order-submission flow
/// surfaces the message to the end user and never creates an order record
/// on any of them. `ForbiddenCombination` and the `Unpriced*` variants name
/// the exact field and value so the UI can highlight the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// No pricing matrix is configured for the requested book size.
    UnknownBookSize {
        /// The requested book size.
        book_size: String,
    },
    /// The combination is excluded by a restriction list.
    ForbiddenCombination {
        /// The rejected input field.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// No price is configured for a needed page-cost tuple.
    UnpricedCombination {
        /// The requested paper type.
        paper_type: String,
        /// The requested paper weight.
        weight: String,
        /// The print mode that could not be resolved.
        print_type: String,
    },
    /// No price is configured for the requested binding type.
    UnpricedBinding {
        /// The requested binding type.
        binding_type: String,
    },
    /// An extra service has an unusable configuration (e.g. a zero step).
    InvalidExtraConfig {
        /// The misconfigured extra service.
        extra_name: String,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBookSize { book_size } => {
                write!(f, "No pricing is configured for book size '{book_size}'")
            }
            Self::ForbiddenCombination { field, value } => {
                write!(f, "'{value}' is not available for {field} with this combination")
            }
            Self::UnpricedCombination {
                paper_type,
                weight,
                print_type,
            } => {
                write!(
                    f,
                    "No price is configured for paper '{paper_type}' at weight '{weight}' in {print_type} printing"
                )
            }
            Self::UnpricedBinding { binding_type } => {
                write!(f, "No price is configured for binding '{binding_type}'")
            }
            Self::InvalidExtraConfig { extra_name } => {
                write!(f, "Extra service '{extra_name}' is misconfigured")
            }
        }
    }
}

impl std::error::Error for PricingError {}
