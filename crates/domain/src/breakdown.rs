// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The itemized result of one price calculation.

use serde::{Deserialize, Serialize};

/// Per-book cost items making up the production cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItemization {
    /// Interior page cost per book (bw and color lanes combined).
    pub pages_cost: i64,
    /// Flat cover cost per book.
    pub cover_cost: i64,
    /// Flat binding cost per book.
    pub binding_cost: i64,
    /// Extras cost for the whole order.
    pub extras_cost: i64,
}

/// The complete price breakdown for one order.
///
/// Every intermediate value of the pipeline is surfaced, not just the final
/// price: the order form renders the itemization and support staff audit
/// calculations from persisted copies. Created once per calculation and
/// never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPriceBreakdown {
    /// Production cost of a single book (pages + cover + binding).
    pub price_per_book: i64,
    /// Number of books ordered.
    pub quantity: u32,
    /// Production cost of the whole order before discount.
    pub subtotal: i64,
    /// Quantity discount percentage applied (0 when below every threshold).
    pub discount_percent: f64,
    /// Absolute discount amount.
    pub discount_amount: i64,
    /// Subtotal minus discount.
    pub total_after_discount: i64,
    /// Profit margin as a percentage, for display.
    pub profit_margin_percent: f64,
    /// Absolute profit amount.
    pub profit_amount: i64,
    /// Final price charged to the customer.
    pub total_price: i64,
    /// Total interior pages per book after even-page normalization.
    pub page_count_total: u32,
    /// Itemized per-book costs.
    pub breakdown: CostItemization,
}
