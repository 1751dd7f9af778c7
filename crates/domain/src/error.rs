// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in the pricing data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A print mode string was not recognized.
    InvalidPrintMode(String),
    /// An extra-charge pricing mode string was not recognized.
    InvalidExtraPricingMode(String),
    /// Ceiling division was attempted with a zero divisor.
    ZeroDivisor {
        /// The dividend of the attempted division.
        dividend: u64,
    },
    /// A price cell held a negative amount.
    NegativePrice(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrintMode(value) => {
                write!(f, "Invalid print mode '{value}'. Must be 'bw' or 'color'")
            }
            Self::InvalidExtraPricingMode(value) => {
                write!(
                    f,
                    "Invalid extra pricing mode '{value}'. Must be 'fixed', 'per_unit' or 'page_based'"
                )
            }
            Self::ZeroDivisor { dividend } => {
                write!(f, "Cannot divide {dividend} by a zero step")
            }
            Self::NegativePrice(amount) => {
                write!(f, "Price cells must be non-negative, got {amount}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
