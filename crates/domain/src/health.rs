// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure health-check evaluation over pricing configuration.
//!
//! Health is **computed**, not stored. Each check is an independent pure
//! function over already-loaded data; findings are data, never control flow.
//! The boundary layer loads the configuration, runs these checks, and
//! aggregates the findings by escalation.

use crate::matrix::PricingMatrix;
use serde::{Deserialize, Serialize};

/// Severity of a health finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Everything in order.
    Healthy,
    /// Degraded but orderable.
    Warning,
    /// Ordering is broken for at least part of the catalog.
    Critical,
}

impl HealthStatus {
    /// Converts this status to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Combines two statuses, keeping the more severe one.
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One diagnostic finding with a remediation suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFinding {
    /// Stable identifier of the check that produced this finding.
    pub check: String,
    /// Finding severity.
    pub status: HealthStatus,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Suggested remediation, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl HealthFinding {
    fn healthy(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            status: HealthStatus::Healthy,
            message,
            suggestion: None,
        }
    }

    fn degraded(check: &str, status: HealthStatus, message: String, suggestion: String) -> Self {
        Self {
            check: check.to_string(),
            status,
            message,
            suggestion: Some(suggestion),
        }
    }
}

/// Per-size audit input for the orderability check.
///
/// `allowed_paper_count` and `allowed_binding_count` come from the
/// constraint engine; this module only judges the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeAudit {
    /// The audited book size.
    pub book_size: String,
    /// Whether its matrix satisfies the completeness invariant.
    pub complete: bool,
    /// Paper types the constraint engine would offer.
    pub allowed_paper_count: usize,
    /// Binding types the constraint engine would offer.
    pub allowed_binding_count: usize,
}

/// Checks that the canonical book-size list is non-empty.
#[must_use]
pub fn evaluate_sizes_defined(sizes: &[String]) -> HealthFinding {
    if sizes.is_empty() {
        HealthFinding::degraded(
            "book_sizes_defined",
            HealthStatus::Critical,
            String::from("No book sizes are defined"),
            String::from("Define at least one book size in the product settings"),
        )
    } else {
        HealthFinding::healthy(
            "book_sizes_defined",
            format!("{} book sizes defined", sizes.len()),
        )
    }
}

/// Checks that every defined size has a persisted matrix.
#[must_use]
pub fn evaluate_matrix_coverage(sizes: &[String], configured: &[String]) -> HealthFinding {
    let missing: Vec<&String> = sizes
        .iter()
        .filter(|size| !configured.contains(size))
        .collect();

    if missing.is_empty() {
        HealthFinding::healthy(
            "matrix_coverage",
            format!("All {} book sizes have a pricing matrix", sizes.len()),
        )
    } else {
        let names: Vec<String> = missing.iter().map(|s| format!("'{s}'")).collect();
        HealthFinding::degraded(
            "matrix_coverage",
            HealthStatus::Warning,
            format!("{} book sizes have no pricing matrix: {}", missing.len(), names.join(", ")),
            String::from("Configure a pricing matrix for each listed size"),
        )
    }
}

/// Checks the completeness invariant for every persisted matrix.
#[must_use]
pub fn evaluate_matrix_completeness(matrices: &[PricingMatrix]) -> HealthFinding {
    let incomplete: Vec<&str> = matrices
        .iter()
        .filter(|matrix| !matrix.is_complete())
        .map(|matrix| matrix.book_size.as_str())
        .collect();

    if incomplete.is_empty() {
        HealthFinding::healthy(
            "matrix_completeness",
            format!("All {} pricing matrices are complete", matrices.len()),
        )
    } else {
        HealthFinding::degraded(
            "matrix_completeness",
            HealthStatus::Warning,
            format!(
                "{} pricing matrices are incomplete and hidden from the order form: {}",
                incomplete.len(),
                incomplete.join(", ")
            ),
            String::from("Add at least one priced page combination and one binding cost"),
        )
    }
}

/// Checks for persisted matrices whose size is not in the canonical list.
#[must_use]
pub fn evaluate_orphaned_matrices(sizes: &[String], configured: &[String]) -> HealthFinding {
    let orphaned: Vec<&String> = configured
        .iter()
        .filter(|size| !sizes.contains(size))
        .collect();

    if orphaned.is_empty() {
        HealthFinding::healthy(
            "orphaned_matrices",
            String::from("No orphaned pricing matrices"),
        )
    } else {
        let names: Vec<String> = orphaned.iter().map(|s| format!("'{s}'")).collect();
        HealthFinding::degraded(
            "orphaned_matrices",
            HealthStatus::Warning,
            format!(
                "{} pricing matrices reference undefined book sizes: {}",
                orphaned.len(),
                names.join(", ")
            ),
            String::from("Re-add the size to the canonical list or delete the stale matrix"),
        )
    }
}

/// Checks that at least one size is fully orderable end to end.
///
/// Orderable means: complete matrix, at least one allowed paper type, and at
/// least one allowed binding type once restrictions are applied. A shop
/// where no size passes cannot take any order at all.
#[must_use]
pub fn evaluate_orderable_sizes(audits: &[SizeAudit]) -> HealthFinding {
    let orderable: usize = audits
        .iter()
        .filter(|audit| {
            audit.complete && audit.allowed_paper_count > 0 && audit.allowed_binding_count > 0
        })
        .count();

    if orderable > 0 {
        HealthFinding::healthy(
            "orderable_sizes",
            format!("{orderable} book sizes are fully orderable"),
        )
    } else {
        HealthFinding::degraded(
            "orderable_sizes",
            HealthStatus::Critical,
            String::from("No book size is fully orderable"),
            String::from(
                "Ensure at least one size has a complete matrix with an allowed paper and binding",
            ),
        )
    }
}

/// Aggregates findings into an overall status by escalation.
#[must_use]
pub fn overall_status(findings: &[HealthFinding]) -> HealthStatus {
    findings
        .iter()
        .fold(HealthStatus::Healthy, |overall, finding| {
            overall.escalate(finding.status)
        })
}
