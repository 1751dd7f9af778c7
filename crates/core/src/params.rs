// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order input sanitization.

use pressrun_domain::{PrintMode, round_up_to_even};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest accepted page count per print lane.
///
/// The boundary layer rejects anything above this before pricing, which
/// keeps every downstream page-count sum and per-page multiplication far
/// from the integer limits.
pub const MAX_PAGE_COUNT: u32 = 100_000;

/// Untyped order input as it arrives from the form or the HTTP layer.
///
/// Every field is optional; sanitization decides the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrderInput {
    /// The requested book size label.
    pub book_size: Option<String>,
    /// The requested paper type label.
    pub paper_type: Option<String>,
    /// The requested paper weight (string, e.g. "70").
    pub paper_weight: Option<String>,
    /// The requested print mode ("bw" or "color").
    pub print_type: Option<String>,
    /// Number of color pages per book.
    pub page_count_color: Option<u32>,
    /// Number of black-and-white pages per book.
    pub page_count_bw: Option<u32>,
    /// Number of books.
    pub quantity: Option<u32>,
    /// The requested binding type label.
    pub binding_type: Option<String>,
    /// The requested cover weight.
    pub cover_weight: Option<String>,
    /// Requested extra services by name.
    pub extras: Option<Vec<String>>,
}

/// Sanitized order parameters.
///
/// Missing numerics default to 0 and missing strings to empty; these are
/// display-tolerant defaults, never silent defaults for financial fields —
/// the engine still rejects anything it cannot price. `page_count_total`
/// carries the universal even-page normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderParameters {
    /// The requested book size label.
    pub book_size: String,
    /// The requested paper type label.
    pub paper_type: String,
    /// The requested paper weight.
    pub paper_weight: String,
    /// The requested print mode, raw. May be empty or unparseable; the
    /// engine validates the lanes that actually carry pages.
    pub print_type: String,
    /// Color pages per book.
    pub page_count_color: u32,
    /// Black-and-white pages per book.
    pub page_count_bw: u32,
    /// Total pages per book, rounded up to the nearest even number.
    /// Books are bound in even-page increments.
    pub page_count_total: u32,
    /// Number of books.
    pub quantity: u32,
    /// The requested binding type label.
    pub binding_type: String,
    /// The requested cover weight.
    pub cover_weight: String,
    /// Requested extras, deduplicated in first-seen order.
    pub extras: Vec<String>,
}

impl OrderParameters {
    /// Sanitizes raw input into engine-ready parameters.
    #[must_use]
    pub fn from_raw(raw: RawOrderInput) -> Self {
        let page_count_color: u32 = raw.page_count_color.unwrap_or(0);
        let page_count_bw: u32 = raw.page_count_bw.unwrap_or(0);

        let mut extras: Vec<String> = Vec::new();
        for extra in raw.extras.unwrap_or_default() {
            if !extras.contains(&extra) {
                extras.push(extra);
            }
        }

        Self {
            book_size: raw.book_size.unwrap_or_default(),
            paper_type: raw.paper_type.unwrap_or_default(),
            paper_weight: raw.paper_weight.unwrap_or_default(),
            print_type: raw.print_type.unwrap_or_default(),
            page_count_color,
            page_count_bw,
            page_count_total: round_up_to_even(page_count_color.saturating_add(page_count_bw)),
            quantity: raw.quantity.unwrap_or(0),
            binding_type: raw.binding_type.unwrap_or_default(),
            cover_weight: raw.cover_weight.unwrap_or_default(),
            extras,
        }
    }

    /// Returns the print lanes that carry pages, with their page counts.
    ///
    /// Only these lanes must resolve to a configured price; a lane with no
    /// requested pages may be absent from the matrix without erroring.
    #[must_use]
    pub fn requested_lanes(&self) -> Vec<(PrintMode, u32)> {
        let mut lanes: Vec<(PrintMode, u32)> = Vec::with_capacity(2);
        if self.page_count_bw > 0 {
            lanes.push((PrintMode::Bw, self.page_count_bw));
        }
        if self.page_count_color > 0 {
            lanes.push((PrintMode::Color, self.page_count_color));
        }
        lanes
    }

    /// The explicitly requested print mode, when it parses.
    #[must_use]
    pub fn requested_print_mode(&self) -> Option<PrintMode> {
        PrintMode::from_str(&self.print_type).ok()
    }
}
