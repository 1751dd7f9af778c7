// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The constraint engine behind the cascading order form.
//!
//! At each form step the UI asks which choices remain valid given the
//! selection so far, so the user can never reach a dead-end combination.
//! Each dimension is filtered one-directionally from the partial selection;
//! the form always proceeds size → paper → weight → print mode → binding →
//! cover weight → extras, so full constraint propagation is unnecessary and
//! deliberately not attempted.

use pressrun_domain::{
    PricingMatrix, PrintMode, PrintModeCosts, QuantityConstraints, Restrictions,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user's selection so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSelection {
    /// Selected paper type, if the user has reached that step.
    pub paper_type: Option<String>,
    /// Selected paper weight.
    pub paper_weight: Option<String>,
    /// Selected binding type.
    pub binding_type: Option<String>,
}

/// One selectable paper type with its selectable weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperOption {
    /// The paper type label.
    pub paper_type: String,
    /// Weights carrying at least one chargeable print mode.
    pub weights: Vec<String>,
}

/// One selectable binding type with its selectable cover weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingOption {
    /// The binding type label.
    pub binding_type: String,
    /// Cover weights available with this binding.
    pub cover_weights: Vec<String>,
}

/// Everything still selectable given a partial selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedOptions {
    /// Selectable paper types with their weights.
    pub papers: Vec<PaperOption>,
    /// Selectable binding types with their cover weights.
    pub bindings: Vec<BindingOption>,
    /// Selectable print modes. Empty until a paper type is selected.
    pub print_modes: Vec<PrintMode>,
    /// Selectable cover weights. Empty until a binding is selected.
    pub cover_weights: Vec<String>,
    /// Selectable extra services. Empty until a binding is selected.
    pub extras: Vec<String>,
    /// Advisory quantity bounds for the quantity selector.
    pub quantity_constraints: QuantityConstraints,
}

impl AllowedOptions {
    /// The view with nothing selectable, served for sizes the form must
    /// not offer.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            papers: Vec::new(),
            bindings: Vec::new(),
            print_modes: Vec::new(),
            cover_weights: Vec::new(),
            extras: Vec::new(),
            quantity_constraints: QuantityConstraints::default(),
        }
    }
}

/// Print modes selectable for one `(paper, weight)` pair: not forbidden and
/// carrying a chargeable price. A soft-disabled (zero-priced) mode is not
/// offered.
fn modes_for_weight(
    restrictions: &Restrictions,
    paper_type: &str,
    weight: &str,
    costs: &PrintModeCosts,
) -> Vec<PrintMode> {
    [PrintMode::Bw, PrintMode::Color]
        .into_iter()
        .filter(|mode| costs.cell(*mode).amount().is_some())
        .filter(|mode| !restrictions.print_mode_forbidden(paper_type, weight, *mode))
        .collect()
}

pub(crate) fn allowed_papers(matrix: &PricingMatrix) -> Vec<PaperOption> {
    matrix
        .page_costs
        .iter()
        .filter(|(paper, _)| !matrix.restrictions.paper_forbidden(paper))
        .filter_map(|(paper, weights)| {
            let selectable: Vec<String> = weights
                .iter()
                .filter(|(_, costs)| costs.has_priced_mode())
                .map(|(weight, _)| weight.clone())
                .collect();
            if selectable.is_empty() {
                None
            } else {
                Some(PaperOption {
                    paper_type: paper.clone(),
                    weights: selectable,
                })
            }
        })
        .collect()
}

pub(crate) fn allowed_bindings(matrix: &PricingMatrix) -> Vec<BindingOption> {
    matrix
        .binding_costs
        .keys()
        .filter(|binding| !matrix.restrictions.binding_forbidden(binding))
        .map(|binding| BindingOption {
            binding_type: binding.clone(),
            cover_weights: allowed_cover_weights(matrix, binding),
        })
        .collect()
}

pub(crate) fn allowed_cover_weights(matrix: &PricingMatrix, binding_type: &str) -> Vec<String> {
    matrix
        .cover_weights
        .iter()
        .filter(|weight| {
            !matrix
                .restrictions
                .cover_weight_forbidden(binding_type, weight)
        })
        .cloned()
        .collect()
}

pub(crate) fn allowed_extras(matrix: &PricingMatrix, binding_type: &str) -> Vec<String> {
    matrix
        .extras_costs
        .keys()
        .filter(|extra| !matrix.restrictions.extra_forbidden(binding_type, extra))
        .cloned()
        .collect()
}

pub(crate) fn allowed_print_modes(matrix: &PricingMatrix, selection: &PartialSelection) -> Vec<PrintMode> {
    let Some(paper_type) = selection.paper_type.as_deref() else {
        return Vec::new();
    };
    if matrix.restrictions.paper_forbidden(paper_type) {
        return Vec::new();
    }
    let Some(weights) = matrix.weights_for(paper_type) else {
        return Vec::new();
    };

    if let Some(weight) = selection.paper_weight.as_deref() {
        return weights.get(weight).map_or_else(Vec::new, |costs| {
            modes_for_weight(&matrix.restrictions, paper_type, weight, costs)
        });
    }

    // No weight selected yet: union across the paper's weights so the form
    // can show provisional options.
    let mut union: Vec<PrintMode> = Vec::with_capacity(2);
    for (weight, costs) in weights {
        for mode in modes_for_weight(&matrix.restrictions, paper_type, weight, costs) {
            if !union.contains(&mode) {
                union.push(mode);
            }
        }
    }
    union.sort_by_key(PrintMode::as_str);
    union
}

/// Computes the set of allowed next-step options for a partial selection.
///
/// A missing matrix is a normal UI state (size chosen, admin has not priced
/// it yet) and is represented at the boundary layer, not here.
#[must_use]
pub fn allowed_options(matrix: &PricingMatrix, selection: &PartialSelection) -> AllowedOptions {
    let (cover_weights, extras) = selection.binding_type.as_deref().map_or_else(
        || (Vec::new(), Vec::new()),
        |binding| {
            (
                allowed_cover_weights(matrix, binding),
                allowed_extras(matrix, binding),
            )
        },
    );

    AllowedOptions {
        papers: allowed_papers(matrix),
        bindings: allowed_bindings(matrix),
        print_modes: allowed_print_modes(matrix, selection),
        cover_weights,
        extras,
        quantity_constraints: matrix.quantity_constraints,
    }
}

/// Selectable weights for one paper type; used by the explainer to build
/// suggestions.
pub(crate) fn selectable_weights(
    matrix: &PricingMatrix,
    paper_type: &str,
) -> Vec<String> {
    matrix.weights_for(paper_type).map_or_else(Vec::new, |weights: &BTreeMap<String, PrintModeCosts>| {
        weights
            .iter()
            .filter(|(_, costs)| costs.has_priced_mode())
            .map(|(weight, _)| weight.clone())
            .collect()
    })
}
