// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pre-submission "why is this invalid" explainer.
//!
//! This is read-only UI support: it reports the first invalid field along
//! with alternative valid values, to drive "did you mean" behavior before
//! submission. It is never the authority gating order creation — the
//! pricing engine performs its own validation at calculation time.

use crate::constraints::{
    PartialSelection, allowed_bindings, allowed_cover_weights, allowed_extras,
    allowed_papers, allowed_print_modes, selectable_weights,
};
use crate::params::OrderParameters;
use pressrun_domain::{PricingMatrix, PrintMode};
use serde::{Deserialize, Serialize};

/// The explainer's verdict for a full parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationReport {
    /// Whether the combination would pass engine validation.
    pub allowed: bool,
    /// `"ok"` when allowed, otherwise the name of the first rejected field.
    pub status: String,
    /// Human-readable explanation.
    pub message: String,
    /// Alternative valid values for the rejected field.
    pub suggestions: Vec<String>,
}

impl CombinationReport {
    fn ok() -> Self {
        Self {
            allowed: true,
            status: String::from("ok"),
            message: String::from("This combination is valid"),
            suggestions: Vec::new(),
        }
    }

    fn rejected(field: &str, message: String, suggestions: Vec<String>) -> Self {
        Self {
            allowed: false,
            status: field.to_string(),
            message,
            suggestions,
        }
    }
}

/// Explains whether a full parameter set would be accepted, and if not,
/// which field to change and to what.
///
/// Checks follow the form's step order and stop at the first rejection.
#[must_use]
pub fn validate_combination(matrix: &PricingMatrix, params: &OrderParameters) -> CombinationReport {
    let paper_suggestions = || -> Vec<String> {
        allowed_papers(matrix)
            .into_iter()
            .map(|option| option.paper_type)
            .collect()
    };

    if matrix.restrictions.paper_forbidden(&params.paper_type)
        || !matrix.page_costs.contains_key(&params.paper_type)
    {
        return CombinationReport::rejected(
            "paper_type",
            format!(
                "Paper '{}' is not available for book size '{}'",
                params.paper_type, matrix.book_size
            ),
            paper_suggestions(),
        );
    }

    let weights: Vec<String> = selectable_weights(matrix, &params.paper_type);
    if !weights.iter().any(|weight| weight == &params.paper_weight) {
        return CombinationReport::rejected(
            "paper_weight",
            format!(
                "Weight '{}' is not available for paper '{}'",
                params.paper_weight, params.paper_type
            ),
            weights,
        );
    }

    let selection: PartialSelection = PartialSelection {
        paper_type: Some(params.paper_type.clone()),
        paper_weight: Some(params.paper_weight.clone()),
        binding_type: None,
    };
    let modes: Vec<PrintMode> = allowed_print_modes(matrix, &selection);
    for (mode, _) in params.requested_lanes() {
        if !modes.contains(&mode) {
            return CombinationReport::rejected(
                "print_type",
                format!(
                    "{} printing is not available for paper '{}' at weight '{}'",
                    mode,
                    params.paper_type,
                    params.paper_weight
                ),
                modes.iter().map(|m| m.as_str().to_string()).collect(),
            );
        }
    }

    let bindings: Vec<String> = allowed_bindings(matrix)
        .into_iter()
        .map(|option| option.binding_type)
        .collect();
    if !bindings.iter().any(|binding| binding == &params.binding_type) {
        return CombinationReport::rejected(
            "binding_type",
            format!(
                "Binding '{}' is not available for book size '{}'",
                params.binding_type, matrix.book_size
            ),
            bindings,
        );
    }

    if !params.cover_weight.is_empty() {
        let cover_weights: Vec<String> = allowed_cover_weights(matrix, &params.binding_type);
        if !cover_weights.iter().any(|weight| weight == &params.cover_weight) {
            return CombinationReport::rejected(
                "cover_weight",
                format!(
                    "Cover weight '{}' is not available with binding '{}'",
                    params.cover_weight, params.binding_type
                ),
                cover_weights,
            );
        }
    }

    let extras: Vec<String> = allowed_extras(matrix, &params.binding_type);
    for extra in &params.extras {
        if matrix.extras_costs.contains_key(extra) && !extras.contains(extra) {
            return CombinationReport::rejected(
                "extras",
                format!(
                    "Extra '{}' is not available with binding '{}'",
                    extra, params.binding_type
                ),
                extras,
            );
        }
    }

    CombinationReport::ok()
}
