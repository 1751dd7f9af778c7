// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the cascading-form constraint engine.

use super::helpers::{a5_matrix, discount_table, reference_order, restricted_matrix};
use crate::constraints::{AllowedOptions, PartialSelection, allowed_options};
use crate::engine::calculate_price;
use crate::error::PricingError;
use crate::params::OrderParameters;
use pressrun_domain::{PriceCell, PricingMatrix, PrintMode, PrintModeRestriction};

fn empty_selection() -> PartialSelection {
    PartialSelection::default()
}

#[test]
fn test_forbidden_paper_never_offered() {
    let mut matrix: PricingMatrix = restricted_matrix();
    matrix
        .restrictions
        .forbidden_paper_types
        .push(String::from("گلاسه"));

    let options: AllowedOptions = allowed_options(&matrix, &empty_selection());

    assert!(options.papers.iter().all(|p| p.paper_type != "گلاسه"));
    assert!(options.papers.iter().any(|p| p.paper_type == "تحریر"));
}

#[test]
fn test_restriction_symmetry_with_engine() {
    // A paper on the forbidden list is rejected by the engine AND absent
    // from the constraint view.
    let mut matrix: PricingMatrix = a5_matrix();
    matrix
        .restrictions
        .forbidden_paper_types
        .push(String::from("تحریر"));

    let options: AllowedOptions = allowed_options(&matrix, &empty_selection());
    assert!(options.papers.iter().all(|p| p.paper_type != "تحریر"));

    let error: PricingError =
        calculate_price(&matrix, &discount_table(), &reference_order()).unwrap_err();
    assert!(matches!(error, PricingError::ForbiddenCombination { .. }));
}

#[test]
fn test_weight_with_only_disabled_modes_not_offered() {
    let mut matrix: PricingMatrix = a5_matrix();
    if let Some(weights) = matrix.page_costs.get_mut("تحریر")
        && let Some(costs) = weights.get_mut("70")
    {
        costs.bw = PriceCell::Disabled;
        costs.color = PriceCell::Disabled;
    }

    let options: AllowedOptions = allowed_options(&matrix, &empty_selection());

    // The paper's only weight is soft-disabled, so the paper drops out.
    assert!(options.papers.iter().all(|p| p.paper_type != "تحریر"));
}

#[test]
fn test_forbidden_binding_never_offered() {
    let options: AllowedOptions = allowed_options(&restricted_matrix(), &empty_selection());

    assert!(options.bindings.iter().all(|b| b.binding_type != "سیمی"));
    assert!(options.bindings.iter().any(|b| b.binding_type == "شومیز"));
}

#[test]
fn test_print_modes_empty_without_paper_selection() {
    let options: AllowedOptions = allowed_options(&a5_matrix(), &empty_selection());

    assert!(options.print_modes.is_empty());
}

#[test]
fn test_print_modes_for_paper_and_weight() {
    let selection: PartialSelection = PartialSelection {
        paper_type: Some(String::from("تحریر")),
        paper_weight: Some(String::from("70")),
        binding_type: None,
    };

    let options: AllowedOptions = allowed_options(&a5_matrix(), &selection);

    assert_eq!(options.print_modes, vec![PrintMode::Bw, PrintMode::Color]);
}

#[test]
fn test_disabled_mode_not_offered_for_weight() {
    let selection: PartialSelection = PartialSelection {
        paper_type: Some(String::from("گلاسه")),
        paper_weight: Some(String::from("135")),
        binding_type: None,
    };

    // glasse 135 has bw disabled and color priced.
    let options: AllowedOptions = allowed_options(&restricted_matrix(), &selection);

    assert_eq!(options.print_modes, vec![PrintMode::Color]);
}

#[test]
fn test_print_modes_union_when_only_paper_selected() {
    let mut matrix: PricingMatrix = restricted_matrix();
    // Second glasse weight with bw priced; the union over weights must
    // offer both modes even though each weight alone offers one.
    if let Some(weights) = matrix.page_costs.get_mut("گلاسه") {
        weights.insert(
            String::from("170"),
            pressrun_domain::PrintModeCosts {
                bw: PriceCell::Priced(1100),
                color: PriceCell::Disabled,
            },
        );
    }
    let selection: PartialSelection = PartialSelection {
        paper_type: Some(String::from("گلاسه")),
        paper_weight: None,
        binding_type: None,
    };

    let options: AllowedOptions = allowed_options(&matrix, &selection);

    assert!(options.print_modes.contains(&PrintMode::Bw));
    assert!(options.print_modes.contains(&PrintMode::Color));
}

#[test]
fn test_per_weight_print_restriction_narrows_one_weight_only() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.restrictions.forbidden_print_types.insert(
        String::from("تحریر"),
        PrintModeRestriction {
            all_weights: Vec::new(),
            per_weight: std::collections::BTreeMap::from([(
                String::from("70"),
                vec![PrintMode::Color],
            )]),
        },
    );
    let selection: PartialSelection = PartialSelection {
        paper_type: Some(String::from("تحریر")),
        paper_weight: Some(String::from("70")),
        binding_type: None,
    };

    let options: AllowedOptions = allowed_options(&matrix, &selection);

    assert_eq!(options.print_modes, vec![PrintMode::Bw]);
}

#[test]
fn test_cover_weights_and_extras_require_binding_selection() {
    let options: AllowedOptions = allowed_options(&restricted_matrix(), &empty_selection());

    assert!(options.cover_weights.is_empty());
    assert!(options.extras.is_empty());
}

#[test]
fn test_cover_weights_minus_forbidden_for_binding() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix
        .restrictions
        .forbidden_cover_weights
        .insert(String::from("شومیز"), vec![String::from("300")]);
    let selection: PartialSelection = PartialSelection {
        paper_type: None,
        paper_weight: None,
        binding_type: Some(String::from("شومیز")),
    };

    let options: AllowedOptions = allowed_options(&matrix, &selection);

    assert_eq!(options.cover_weights, vec![String::from("250")]);
}

#[test]
fn test_extras_minus_forbidden_for_binding() {
    let selection: PartialSelection = PartialSelection {
        paper_type: None,
        paper_weight: None,
        binding_type: Some(String::from("شومیز")),
    };

    let options: AllowedOptions = allowed_options(&restricted_matrix(), &selection);

    // restricted_matrix forbids packaging with shoomiz binding.
    assert!(options.extras.iter().all(|e| e != "بسته بندی"));
    assert!(options.extras.iter().any(|e| e == "سلفون"));
}

#[test]
fn test_quantity_constraints_are_surfaced() {
    let mut matrix: PricingMatrix = a5_matrix();
    matrix.quantity_constraints.minimum_quantity = 10;
    matrix.quantity_constraints.quantity_step = 10;

    let options: AllowedOptions = allowed_options(&matrix, &empty_selection());

    assert_eq!(options.quantity_constraints.minimum_quantity, 10);
    assert_eq!(options.quantity_constraints.quantity_step, 10);
}

#[test]
fn test_empty_matrix_offers_nothing() {
    let options: AllowedOptions =
        allowed_options(&PricingMatrix::new("A4"), &empty_selection());

    assert!(options.papers.is_empty());
    assert!(options.bindings.is_empty());
    assert_eq!(options, AllowedOptions::empty());
}
