// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Engine types that already serialize cleanly (breakdowns, reports,
//! option sets) are embedded rather than mirrored field by field.

use pressrun::AllowedOptions;
use pressrun_domain::{
    HealthFinding, HealthStatus, OrderPriceBreakdown, PricingMatrix, QuantityDiscountTable,
    SizeAudit,
};

/// API response for a successful price calculation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalculatePriceResponse {
    /// Which engine priced the order: `"matrix"` or `"legacy"`.
    pub engine: String,
    /// The full itemized breakdown.
    pub breakdown: OrderPriceBreakdown,
}

/// API request for the options still selectable given a partial selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllowedOptionsRequest {
    /// The book size being configured.
    #[serde(default)]
    pub book_size: String,
    /// Selected paper type, if the user has reached that step.
    pub paper_type: Option<String>,
    /// Selected paper weight.
    pub paper_weight: Option<String>,
    /// Selected binding type.
    pub binding_type: Option<String>,
}

/// API response carrying the selectable options for one book size.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllowedOptionsResponse {
    /// The book size the options apply to.
    pub book_size: String,
    /// Whether a pricing matrix is configured for this size.
    pub configured: bool,
    /// Whether the matrix is complete enough to price an order. When
    /// false the option set is empty and the size cannot be ordered, even
    /// if a (partial) matrix exists.
    pub orderable: bool,
    /// The selectable options.
    pub options: AllowedOptions,
}

/// API response for the configuration health check.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HealthCheckResponse {
    /// Worst severity across all findings.
    pub status: HealthStatus,
    /// One finding per check, in check order.
    pub findings: Vec<HealthFinding>,
    /// Per-size audit of completeness and orderability.
    pub sizes: Vec<SizeAudit>,
}

/// API request to store the pricing matrix for a book size.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SaveMatrixRequest {
    /// The book size the matrix prices.
    pub book_size: String,
    /// The full matrix document.
    pub matrix: PricingMatrix,
}

/// API response for a successful matrix save.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveMatrixResponse {
    /// The book size that was saved.
    pub book_size: String,
    /// A success message.
    pub message: String,
}

/// One configured matrix in the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatrixSummary {
    /// The book size the matrix prices.
    pub book_size: String,
    /// Canonical ASCII identifier for the label, empty if none exists.
    pub slug: String,
    /// `"active"` or `"disabled"`.
    pub status: String,
    /// Whether the matrix satisfies the completeness invariant.
    pub complete: bool,
    /// Paper types carrying at least one cell.
    pub paper_type_count: usize,
    /// Binding types carrying a price.
    pub binding_type_count: usize,
}

/// API response listing every configured matrix.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListMatricesResponse {
    /// One summary per configured book size, sorted by size label.
    pub matrices: Vec<MatrixSummary>,
}

/// API response carrying the quantity discount table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiscountsResponse {
    /// Threshold quantity to discount percent.
    pub thresholds: QuantityDiscountTable,
}

/// API request to replace the quantity discount table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SetDiscountsRequest {
    /// Threshold quantity to discount percent.
    pub thresholds: QuantityDiscountTable,
}

/// API response for a successful discount table replacement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetDiscountsResponse {
    /// Number of thresholds stored.
    pub threshold_count: usize,
    /// A success message.
    pub message: String,
}
