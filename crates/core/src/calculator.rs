// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strategy dispatch between the two pricing engines.

use crate::engine::calculate_price;
use crate::error::PricingError;
use crate::legacy::{LegacyRates, calculate_legacy_price};
use crate::params::OrderParameters;
use pressrun_domain::{OrderPriceBreakdown, PricingMatrix, QuantityDiscountTable};

/// The pricing strategy selected for one calculation.
///
/// Exactly one variant is constructed per order, chosen once from the
/// `pricing_engine_v2_enabled` flag before any cost work starts. The two
/// engines are never both consulted for the same order.
#[derive(Debug, Clone, Copy)]
pub enum PriceCalculator<'a> {
    /// The matrix engine: per-size sparse matrices with restrictions.
    Matrix(&'a PricingMatrix),
    /// The deprecated flat-multiplier engine.
    Legacy(&'a LegacyRates),
}

impl PriceCalculator<'_> {
    /// Runs the selected engine over a sanitized parameter set.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`PricingError`]; both variants share one
    /// taxonomy.
    pub fn calculate(
        &self,
        discounts: &QuantityDiscountTable,
        params: &OrderParameters,
    ) -> Result<OrderPriceBreakdown, PricingError> {
        match self {
            Self::Matrix(matrix) => calculate_price(matrix, discounts, params),
            Self::Legacy(rates) => calculate_legacy_price(rates, discounts, params),
        }
    }
}
