// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Threshold-based quantity discounts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Global quantity discount table: minimum-quantity threshold → percentage.
///
/// Thresholds are not cumulative. The highest threshold less than or equal
/// to the order quantity wins; a quantity qualifying for several thresholds
/// gets only that one percentage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityDiscountTable {
    thresholds: BTreeMap<u32, f64>,
}

impl QuantityDiscountTable {
    /// Creates an empty table (no discounts at any quantity).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thresholds: BTreeMap::new(),
        }
    }

    /// Adds or replaces a threshold.
    pub fn set_threshold(&mut self, minimum_quantity: u32, percent: f64) {
        self.thresholds.insert(minimum_quantity, percent);
    }

    /// Returns the discount percentage for an order quantity.
    ///
    /// The highest threshold ≤ `quantity` wins; 0.0 when no threshold
    /// qualifies.
    #[must_use]
    pub fn percent_for(&self, quantity: u32) -> f64 {
        self.thresholds
            .range(..=quantity)
            .next_back()
            .map_or(0.0, |(_, percent)| *percent)
    }

    /// Returns the configured thresholds in ascending order.
    #[must_use]
    pub const fn thresholds(&self) -> &BTreeMap<u32, f64> {
        &self.thresholds
    }

    /// Returns true if no thresholds are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}
