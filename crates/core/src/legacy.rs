// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The deprecated flat-multiplier pricing engine.
//!
//! Retained for installations whose configuration predates the per-size
//! matrix model. Cost lookup uses flat dictionaries and one multiplier per
//! book size; there is no sparsity and there are no restriction lists. The
//! quantity/discount/margin tail is shared with the matrix engine.

use crate::engine::{apply_rate, settle};
use crate::error::PricingError;
use crate::params::OrderParameters;
use pressrun_domain::{
    CostItemization, OrderPriceBreakdown, PrintMode, QuantityDiscountTable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-page surcharge for each print mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyPrintCosts {
    /// Black-and-white per-page surcharge.
    #[serde(default)]
    pub bw: i64,
    /// Color per-page surcharge.
    #[serde(default)]
    pub color: i64,
}

impl LegacyPrintCosts {
    const fn for_mode(&self, mode: PrintMode) -> i64 {
        match mode {
            PrintMode::Bw => self.bw,
            PrintMode::Color => self.color,
        }
    }
}

/// Flat rate dictionaries for the legacy engine.
///
/// Loaded from the `pricing_legacy_rates` configuration key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyRates {
    /// Base per-page cost keyed by paper type.
    #[serde(default)]
    pub paper_base_costs: BTreeMap<String, i64>,
    /// Per-page surcharge per print mode.
    #[serde(default)]
    pub print_costs: LegacyPrintCosts,
    /// One multiplier per book size.
    #[serde(default)]
    pub size_multipliers: BTreeMap<String, f64>,
    /// Flat per-book cover cost.
    #[serde(default)]
    pub cover_cost: i64,
    /// Flat per-book binding cost keyed by binding type.
    #[serde(default)]
    pub binding_costs: BTreeMap<String, i64>,
    /// Flat per-order add-on costs keyed by option name.
    #[serde(default)]
    pub option_costs: BTreeMap<String, i64>,
    /// Fraction applied to the post-discount subtotal.
    #[serde(default)]
    pub profit_margin: f64,
}

/// Computes a price breakdown with the legacy flat-multiplier model.
///
/// `price_per_page = (paper_base_cost + print_cost) × size_multiplier`,
/// summed over the lanes that carry pages, plus flat cover, binding, and
/// option costs.
///
/// # Errors
///
/// Returns a [`PricingError`] when the book size has no multiplier or a
/// needed flat rate is missing. The error taxonomy is shared with the
/// matrix engine so callers report both identically.
pub fn calculate_legacy_price(
    rates: &LegacyRates,
    discounts: &QuantityDiscountTable,
    params: &OrderParameters,
) -> Result<OrderPriceBreakdown, PricingError> {
    let multiplier: f64 = *rates.size_multipliers.get(&params.book_size).ok_or_else(|| {
        PricingError::UnknownBookSize {
            book_size: params.book_size.clone(),
        }
    })?;

    let mut pages_cost: i64 = 0;
    for (mode, count) in params.requested_lanes() {
        let paper_base: i64 =
            *rates
                .paper_base_costs
                .get(&params.paper_type)
                .ok_or_else(|| PricingError::UnpricedCombination {
                    paper_type: params.paper_type.clone(),
                    weight: params.paper_weight.clone(),
                    print_type: mode.as_str().to_string(),
                })?;
        let price_per_page: i64 = apply_rate(paper_base + rates.print_costs.for_mode(mode), multiplier);
        pages_cost += price_per_page * i64::from(count);
    }

    let binding_cost: i64 = *rates
        .binding_costs
        .get(&params.binding_type)
        .ok_or_else(|| PricingError::UnpricedBinding {
            binding_type: params.binding_type.clone(),
        })?;

    // Options are flat per-order charges; unknown names contribute nothing.
    let extras_cost: i64 = params
        .extras
        .iter()
        .filter_map(|name| rates.option_costs.get(name))
        .sum();

    let items: CostItemization = CostItemization {
        pages_cost,
        cover_cost: rates.cover_cost,
        binding_cost,
        extras_cost,
    };

    Ok(settle(
        items,
        params.quantity,
        params.page_count_total,
        rates.profit_margin,
        discounts,
    ))
}
