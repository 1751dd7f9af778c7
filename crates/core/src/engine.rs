// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The matrix pricing engine.
//!
//! Validation against the restriction lists strictly precedes any cost
//! lookup, so a forbidden combination is always reported as forbidden, not
//! as unpriced. Each step is a hard precondition for the next.

use crate::error::PricingError;
use crate::params::OrderParameters;
use pressrun_domain::{
    CostItemization, ExtraPricingMode, OrderPriceBreakdown, PriceCell, PricingMatrix,
    QuantityDiscountTable, ceil_div,
};

/// Applies a fractional rate to a money amount, rounding half away from zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn apply_rate(amount: i64, rate: f64) -> i64 {
    (amount as f64 * rate).round() as i64
}

/// Shared tail of both pricing engines: quantity, discount, margin.
///
/// `per_book` items multiply by quantity; `extras_cost` is already an
/// order-level amount and joins the subtotal unscaled.
pub(crate) fn settle(
    items: CostItemization,
    quantity: u32,
    page_count_total: u32,
    profit_margin: f64,
    discounts: &QuantityDiscountTable,
) -> OrderPriceBreakdown {
    let price_per_book: i64 = items.pages_cost + items.cover_cost + items.binding_cost;
    let subtotal: i64 = price_per_book * i64::from(quantity) + items.extras_cost;

    let discount_percent: f64 = discounts.percent_for(quantity);
    let discount_amount: i64 = apply_rate(subtotal, discount_percent / 100.0);
    let total_after_discount: i64 = subtotal - discount_amount;

    let profit_amount: i64 = apply_rate(total_after_discount, profit_margin);
    let total_price: i64 = total_after_discount + profit_amount;

    OrderPriceBreakdown {
        price_per_book,
        quantity,
        subtotal,
        discount_percent,
        discount_amount,
        total_after_discount,
        profit_margin_percent: profit_margin * 100.0,
        profit_amount,
        total_price,
        page_count_total,
        breakdown: items,
    }
}

fn validate_restrictions(
    matrix: &PricingMatrix,
    params: &OrderParameters,
) -> Result<(), PricingError> {
    if matrix.restrictions.paper_forbidden(&params.paper_type) {
        return Err(PricingError::ForbiddenCombination {
            field: String::from("paper_type"),
            value: params.paper_type.clone(),
        });
    }

    if matrix.restrictions.binding_forbidden(&params.binding_type) {
        return Err(PricingError::ForbiddenCombination {
            field: String::from("binding_type"),
            value: params.binding_type.clone(),
        });
    }

    for (mode, _) in params.requested_lanes() {
        if matrix
            .restrictions
            .print_mode_forbidden(&params.paper_type, &params.paper_weight, mode)
        {
            return Err(PricingError::ForbiddenCombination {
                field: String::from("print_type"),
                value: mode.as_str().to_string(),
            });
        }
    }

    Ok(())
}

fn pages_cost(matrix: &PricingMatrix, params: &OrderParameters) -> Result<i64, PricingError> {
    let mut cost: i64 = 0;

    for (mode, count) in params.requested_lanes() {
        let cell: PriceCell = matrix.page_cost(&params.paper_type, &params.paper_weight, mode);
        let Some(unit) = cell.amount() else {
            return Err(PricingError::UnpricedCombination {
                paper_type: params.paper_type.clone(),
                weight: params.paper_weight.clone(),
                print_type: mode.as_str().to_string(),
            });
        };
        cost += unit * i64::from(count);
    }

    Ok(cost)
}

fn extras_cost(matrix: &PricingMatrix, params: &OrderParameters) -> Result<i64, PricingError> {
    let mut cost: i64 = 0;

    for name in &params.extras {
        // Unknown or legacy extra names contribute nothing; they never
        // abort the calculation.
        let Some(extra) = matrix.extras_costs.get(name) else {
            continue;
        };

        cost += match extra.mode {
            ExtraPricingMode::Fixed => extra.price,
            ExtraPricingMode::PerUnit => extra.price * i64::from(params.quantity),
            ExtraPricingMode::PageBased => {
                let printed_pages: u64 =
                    u64::from(params.page_count_total) * u64::from(params.quantity);
                let charges: u64 = ceil_div(printed_pages, u64::from(extra.step)).map_err(
                    |_| PricingError::InvalidExtraConfig {
                        extra_name: name.clone(),
                    },
                )?;
                extra.price * i64::try_from(charges).map_err(|_| {
                    PricingError::InvalidExtraConfig {
                        extra_name: name.clone(),
                    }
                })?
            }
        };
    }

    Ok(cost)
}

/// Computes the full price breakdown for a complete parameter set.
///
/// The caller resolves the matrix for `params.book_size`; a missing matrix
/// is `PricingError::UnknownBookSize` at that boundary. Only the print lanes
/// with a nonzero page count must resolve to a configured price.
///
/// # Errors
///
/// Returns a [`PricingError`] naming the rejected field or missing price
/// tuple. No partial breakdown is ever produced.
pub fn calculate_price(
    matrix: &PricingMatrix,
    discounts: &QuantityDiscountTable,
    params: &OrderParameters,
) -> Result<OrderPriceBreakdown, PricingError> {
    validate_restrictions(matrix, params)?;

    let pages: i64 = pages_cost(matrix, params)?;

    let binding: i64 = matrix
        .binding_costs
        .get(&params.binding_type)
        .copied()
        .ok_or_else(|| PricingError::UnpricedBinding {
            binding_type: params.binding_type.clone(),
        })?;

    let extras: i64 = extras_cost(matrix, params)?;

    let items: CostItemization = CostItemization {
        pages_cost: pages,
        cover_cost: matrix.cover_cost,
        binding_cost: binding,
        extras_cost: extras,
    };

    Ok(settle(
        items,
        params.quantity,
        params.page_count_total,
        matrix.profit_margin,
        discounts,
    ))
}
