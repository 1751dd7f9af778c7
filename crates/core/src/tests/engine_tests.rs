// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the matrix pricing engine pipeline.

use super::helpers::{a5_matrix, discount_table, reference_order, restricted_matrix};
use crate::engine::calculate_price;
use crate::error::PricingError;
use crate::params::OrderParameters;
use pressrun_domain::{
    ExtraCharge, ExtraPricingMode, OrderPriceBreakdown, PriceCell, PricingMatrix,
    QuantityDiscountTable,
};

#[test]
fn test_reference_order_breakdown() {
    let breakdown: OrderPriceBreakdown =
        calculate_price(&a5_matrix(), &discount_table(), &reference_order()).unwrap();

    assert_eq!(breakdown.page_count_total, 100);
    assert_eq!(breakdown.breakdown.pages_cost, 38_000);
    assert_eq!(breakdown.price_per_book, 49_000);
    assert_eq!(breakdown.subtotal, 2_940_000);
    assert_eq!(breakdown.discount_percent, 5.0);
    assert_eq!(breakdown.discount_amount, 147_000);
    assert_eq!(breakdown.total_after_discount, 2_793_000);
    assert_eq!(breakdown.profit_amount, 279_300);
    assert_eq!(breakdown.total_price, 3_072_300);
}

#[test]
fn test_higher_threshold_wins_but_is_not_cumulative() {
    let mut params: OrderParameters = reference_order();
    params.quantity = 150;

    let breakdown: OrderPriceBreakdown =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap();

    // 150 qualifies for both thresholds; only the 10% one applies.
    assert_eq!(breakdown.discount_percent, 10.0);
}

#[test]
fn test_unknown_paper_is_unpriced() {
    let mut params: OrderParameters = reference_order();
    params.paper_type = String::from("بالک");

    let error: PricingError =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::UnpricedCombination {
            paper_type: String::from("بالک"),
            weight: String::from("70"),
            print_type: String::from("bw"),
        }
    );
}

#[test]
fn test_page_count_total_is_rounded_up_to_even() {
    let mut params: OrderParameters = reference_order();
    params.page_count_bw = 99;
    params.page_count_total = pressrun_domain::round_up_to_even(99);

    let breakdown: OrderPriceBreakdown =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap();

    assert_eq!(breakdown.page_count_total, 100);
    // The per-page cost still uses the requested lane count, not the
    // normalized total.
    assert_eq!(breakdown.breakdown.pages_cost, 380 * 99);
}

#[test]
fn test_forbidden_paper_rejected_before_cost_lookup() {
    let mut matrix: PricingMatrix = a5_matrix();
    // Forbidden AND unpriced: the restriction must win.
    matrix
        .restrictions
        .forbidden_paper_types
        .push(String::from("بالک"));
    let mut params: OrderParameters = reference_order();
    params.paper_type = String::from("بالک");

    let error: PricingError =
        calculate_price(&matrix, &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::ForbiddenCombination {
            field: String::from("paper_type"),
            value: String::from("بالک"),
        }
    );
}

#[test]
fn test_forbidden_binding_rejected() {
    let mut params: OrderParameters = reference_order();
    params.binding_type = String::from("سیمی");

    let error: PricingError =
        calculate_price(&restricted_matrix(), &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::ForbiddenCombination {
            field: String::from("binding_type"),
            value: String::from("سیمی"),
        }
    );
}

#[test]
fn test_unpriced_binding_rejected() {
    let mut params: OrderParameters = reference_order();
    params.binding_type = String::from("جلد سخت");

    let error: PricingError =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::UnpricedBinding {
            binding_type: String::from("جلد سخت"),
        }
    );
}

#[test]
fn test_unneeded_lane_may_be_absent() {
    let mut matrix: PricingMatrix = a5_matrix();
    if let Some(weights) = matrix.page_costs.get_mut("تحریر")
        && let Some(costs) = weights.get_mut("70")
    {
        costs.color = PriceCell::Unset;
    }

    // No color pages requested, so the missing color lane must not error.
    let breakdown: OrderPriceBreakdown =
        calculate_price(&matrix, &discount_table(), &reference_order()).unwrap();

    assert_eq!(breakdown.breakdown.pages_cost, 38_000);
}

#[test]
fn test_disabled_lane_is_unpriced_when_needed() {
    let mut matrix: PricingMatrix = a5_matrix();
    if let Some(weights) = matrix.page_costs.get_mut("تحریر")
        && let Some(costs) = weights.get_mut("70")
    {
        costs.color = PriceCell::Disabled;
    }
    let mut params: OrderParameters = reference_order();
    params.page_count_color = 10;

    let error: PricingError =
        calculate_price(&matrix, &discount_table(), &params).unwrap_err();

    assert!(matches!(error, PricingError::UnpricedCombination { .. }));
}

#[test]
fn test_both_lanes_priced_independently() {
    let mut params: OrderParameters = reference_order();
    params.page_count_bw = 80;
    params.page_count_color = 20;
    params.page_count_total = 100;

    let breakdown: OrderPriceBreakdown =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap();

    assert_eq!(breakdown.breakdown.pages_cost, 380 * 80 + 980 * 20);
}

#[test]
fn test_fixed_extra_charged_once() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.extras_costs.insert(
        String::from("بسته بندی"),
        ExtraCharge {
            price: 50_000,
            mode: ExtraPricingMode::Fixed,
            step: 0,
        },
    );
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("بسته بندی")];

    let breakdown: OrderPriceBreakdown =
        calculate_price(&matrix, &discount_table(), &params).unwrap();

    assert_eq!(breakdown.breakdown.extras_cost, 50_000);
    assert_eq!(breakdown.subtotal, 2_940_000 + 50_000);
}

#[test]
fn test_per_unit_extra_scales_with_quantity() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.extras_costs.insert(
        String::from("سلفون"),
        ExtraCharge {
            price: 1500,
            mode: ExtraPricingMode::PerUnit,
            step: 0,
        },
    );
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("سلفون")];

    let breakdown: OrderPriceBreakdown =
        calculate_price(&matrix, &discount_table(), &params).unwrap();

    assert_eq!(breakdown.breakdown.extras_cost, 1500 * 60);
}

#[test]
fn test_page_based_extra_rounds_charges_up() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.extras_costs.insert(
        String::from("صحافی ویژه"),
        ExtraCharge {
            price: 700,
            mode: ExtraPricingMode::PageBased,
            step: 1000,
        },
    );
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("صحافی ویژه")];

    let breakdown: OrderPriceBreakdown =
        calculate_price(&matrix, &discount_table(), &params).unwrap();

    // 100 pages × 60 books = 6000 printed pages → 6 charges of 700.
    assert_eq!(breakdown.breakdown.extras_cost, 700 * 6);
}

#[test]
fn test_page_based_extra_with_zero_step_is_a_config_error() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.extras_costs.insert(
        String::from("صحافی ویژه"),
        ExtraCharge {
            price: 700,
            mode: ExtraPricingMode::PageBased,
            step: 0,
        },
    );
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("صحافی ویژه")];

    let error: PricingError =
        calculate_price(&matrix, &discount_table(), &params).unwrap_err();

    assert_eq!(
        error,
        PricingError::InvalidExtraConfig {
            extra_name: String::from("صحافی ویژه"),
        }
    );
}

#[test]
fn test_unknown_extras_contribute_nothing() {
    let mut params: OrderParameters = reference_order();
    params.extras = vec![String::from("برش لیزری")];

    let breakdown: OrderPriceBreakdown =
        calculate_price(&a5_matrix(), &discount_table(), &params).unwrap();

    assert_eq!(breakdown.breakdown.extras_cost, 0);
    assert_eq!(breakdown.total_price, 3_072_300);
}

#[test]
fn test_calculation_is_idempotent() {
    let matrix: PricingMatrix = a5_matrix();
    let discounts: QuantityDiscountTable = discount_table();
    let params: OrderParameters = reference_order();

    let first: OrderPriceBreakdown = calculate_price(&matrix, &discounts, &params).unwrap();
    let second: OrderPriceBreakdown = calculate_price(&matrix, &discounts, &params).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_total_price_is_non_decreasing_below_next_threshold() {
    let matrix: PricingMatrix = a5_matrix();
    let discounts: QuantityDiscountTable = discount_table();

    let mut previous: i64 = 0;
    for quantity in 50..100 {
        let mut params: OrderParameters = reference_order();
        params.quantity = quantity;
        let breakdown: OrderPriceBreakdown =
            calculate_price(&matrix, &discounts, &params).unwrap();
        assert!(breakdown.total_price >= previous);
        previous = breakdown.total_price;
    }
}

#[test]
fn test_threshold_crossing_is_a_one_time_step() {
    let matrix: PricingMatrix = a5_matrix();
    let discounts: QuantityDiscountTable = discount_table();

    let mut at_99: OrderParameters = reference_order();
    at_99.quantity = 99;
    let mut at_100: OrderParameters = reference_order();
    at_100.quantity = 100;

    let total_99: i64 = calculate_price(&matrix, &discounts, &at_99).unwrap().total_price;
    let total_100: i64 = calculate_price(&matrix, &discounts, &at_100).unwrap().total_price;

    // Crossing the threshold increases the total by less than one
    // undiscounted book would.
    let undiscounted_book: i64 = 49_000 + 4_900; // per-book cost plus margin
    assert!(total_100 - total_99 < undiscounted_book);
}

#[test]
fn test_zero_margin_and_no_discount() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.profit_margin = 0.0;
    let mut params: OrderParameters = reference_order();
    params.quantity = 10;

    let breakdown: OrderPriceBreakdown =
        calculate_price(&matrix, &QuantityDiscountTable::new(), &params).unwrap();

    assert_eq!(breakdown.discount_amount, 0);
    assert_eq!(breakdown.profit_amount, 0);
    assert_eq!(breakdown.total_price, breakdown.subtotal);
}
