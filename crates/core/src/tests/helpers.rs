// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for engine and constraint tests.

use crate::params::{OrderParameters, RawOrderInput};
use pressrun_domain::{
    ExtraCharge, ExtraPricingMode, PriceCell, PricingMatrix, PrintModeCosts,
    QuantityDiscountTable,
};
use std::collections::BTreeMap;

/// The A5 matrix from the shop's reference configuration: tahrir 70g paper
/// at 380/980 per page, shoomiz binding at 3000, cover at 8000, 10% margin.
pub fn a5_matrix() -> PricingMatrix {
    let mut matrix: PricingMatrix = PricingMatrix::new("A5");

    let mut weights: BTreeMap<String, PrintModeCosts> = BTreeMap::new();
    weights.insert(
        String::from("70"),
        PrintModeCosts {
            bw: PriceCell::Priced(380),
            color: PriceCell::Priced(980),
        },
    );
    matrix.page_costs.insert(String::from("تحریر"), weights);

    matrix.binding_costs.insert(String::from("شومیز"), 3000);
    matrix.cover_cost = 8000;
    matrix.cover_weights = vec![String::from("250"), String::from("300")];
    matrix.profit_margin = 0.1;

    matrix
}

/// `a5_matrix` extended with a second paper, extras, and restrictions.
pub fn restricted_matrix() -> PricingMatrix {
    let mut matrix: PricingMatrix = a5_matrix();

    let mut glasse_weights: BTreeMap<String, PrintModeCosts> = BTreeMap::new();
    glasse_weights.insert(
        String::from("135"),
        PrintModeCosts {
            bw: PriceCell::Disabled,
            color: PriceCell::Priced(1400),
        },
    );
    matrix.page_costs.insert(String::from("گلاسه"), glasse_weights);

    matrix.binding_costs.insert(String::from("سیمی"), 2000);

    matrix.extras_costs.insert(
        String::from("سلفون"),
        ExtraCharge {
            price: 1500,
            mode: ExtraPricingMode::PerUnit,
            step: 0,
        },
    );
    matrix.extras_costs.insert(
        String::from("بسته بندی"),
        ExtraCharge {
            price: 50000,
            mode: ExtraPricingMode::Fixed,
            step: 0,
        },
    );

    matrix
        .restrictions
        .forbidden_paper_types
        .push(String::from("کرافت"));
    matrix
        .restrictions
        .forbidden_binding_types
        .push(String::from("سیمی"));
    matrix
        .restrictions
        .forbidden_extras
        .insert(String::from("شومیز"), vec![String::from("بسته بندی")]);

    matrix
}

/// The reference discount table: 5% from 50 books, 10% from 100.
pub fn discount_table() -> QuantityDiscountTable {
    let mut table: QuantityDiscountTable = QuantityDiscountTable::new();
    table.set_threshold(50, 5.0);
    table.set_threshold(100, 10.0);
    table
}

/// The reference order: 100 bw pages, 60 books, shoomiz binding.
pub fn reference_order() -> OrderParameters {
    OrderParameters::from_raw(RawOrderInput {
        book_size: Some(String::from("A5")),
        paper_type: Some(String::from("تحریر")),
        paper_weight: Some(String::from("70")),
        print_type: Some(String::from("bw")),
        page_count_bw: Some(100),
        page_count_color: Some(0),
        quantity: Some(60),
        binding_type: Some(String::from("شومیز")),
        cover_weight: None,
        extras: None,
    })
}
