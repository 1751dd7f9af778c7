// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the deprecated flat-multiplier engine and strategy dispatch.

use super::helpers::{a5_matrix, discount_table, reference_order};
use crate::calculator::PriceCalculator;
use crate::error::PricingError;
use crate::legacy::{LegacyPrintCosts, LegacyRates, calculate_legacy_price};
use crate::params::OrderParameters;
use pressrun_domain::{OrderPriceBreakdown, PricingMatrix, QuantityDiscountTable};
use std::collections::BTreeMap;

fn legacy_rates() -> LegacyRates {
    LegacyRates {
        paper_base_costs: BTreeMap::from([(String::from("تحریر"), 300)]),
        print_costs: LegacyPrintCosts { bw: 100, color: 600 },
        size_multipliers: BTreeMap::from([
            (String::from("A5"), 1.0),
            (String::from("A4"), 1.5),
        ]),
        cover_cost: 8000,
        binding_costs: BTreeMap::from([(String::from("شومیز"), 3000)]),
        option_costs: BTreeMap::from([(String::from("سلفون"), 20_000)]),
        profit_margin: 0.1,
    }
}

#[test]
fn test_flat_multiplier_pipeline() {
    let breakdown: OrderPriceBreakdown =
        calculate_legacy_price(&legacy_rates(), &discount_table(), &reference_order()).unwrap();

    // (300 + 100) × 1.0 = 400 per bw page, 100 pages, same tail as the
    // matrix engine.
    assert_eq!(breakdown.breakdown.pages_cost, 40_000);
    assert_eq!(breakdown.price_per_book, 40_000 + 8000 + 3000);
    assert_eq!(breakdown.discount_percent, 5.0);
}

#[test]
fn test_size_multiplier_scales_page_price() {
    let mut params: OrderParameters = reference_order();
    params.book_size = String::from("A4");

    let breakdown: OrderPriceBreakdown =
        calculate_legacy_price(&legacy_rates(), &discount_table(), &params).unwrap();

    assert_eq!(breakdown.breakdown.pages_cost, 600 * 100);
}

#[test]
fn test_unknown_size_has_no_multiplier() {
    let mut params: OrderParameters = reference_order();
    params.book_size = String::from("B5");

    let error: PricingError =
        calculate_legacy_price(&legacy_rates(), &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::UnknownBookSize {
            book_size: String::from("B5"),
        }
    );
}

#[test]
fn test_unknown_paper_is_unpriced() {
    let mut params: OrderParameters = reference_order();
    params.paper_type = String::from("گلاسه");

    let error: PricingError =
        calculate_legacy_price(&legacy_rates(), &discount_table(), &params).unwrap_err();

    assert!(matches!(error, PricingError::UnpricedCombination { .. }));
}

#[test]
fn test_flat_options_are_order_level() {
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("سلفون"), String::from("برش لیزری")];

    let breakdown: OrderPriceBreakdown =
        calculate_legacy_price(&legacy_rates(), &discount_table(), &params).unwrap();

    // Known option charged once; unknown option ignored.
    assert_eq!(breakdown.breakdown.extras_cost, 20_000);
}

#[test]
fn test_calculator_dispatches_to_selected_engine() {
    let matrix: PricingMatrix = a5_matrix();
    let rates: LegacyRates = legacy_rates();
    let discounts: QuantityDiscountTable = discount_table();
    let params: OrderParameters = reference_order();

    let matrix_total: i64 = PriceCalculator::Matrix(&matrix)
        .calculate(&discounts, &params)
        .unwrap()
        .total_price;
    let legacy_total: i64 = PriceCalculator::Legacy(&rates)
        .calculate(&discounts, &params)
        .unwrap()
        .total_price;

    // Same pipeline tail, different cost models.
    assert_eq!(matrix_total, 3_072_300);
    assert_ne!(matrix_total, legacy_total);
}
