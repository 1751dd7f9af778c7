// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod breakdown;
mod discount;
mod error;
mod health;
mod matrix;
mod rounding;
mod slug;

#[cfg(test)]
mod tests;

pub use breakdown::{CostItemization, OrderPriceBreakdown};
pub use discount::QuantityDiscountTable;
pub use error::DomainError;
pub use health::{
    HealthFinding, HealthStatus, SizeAudit, evaluate_matrix_completeness, evaluate_matrix_coverage,
    evaluate_orderable_sizes, evaluate_orphaned_matrices, evaluate_sizes_defined, overall_status,
};
pub use matrix::{
    ExtraCharge, ExtraPricingMode, MatrixStatus, PriceCell, PricingMatrix, PrintMode,
    PrintModeCosts, PrintModeRestriction, QuantityConstraints, Restrictions,
};
pub use rounding::{ceil_div, round_up_to_even};
pub use slug::{label_to_slug, slug_to_label};
