// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pricing matrix: the complete, size-scoped configuration of every
//! cost dimension and restriction for one book size.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A single price cell in the page-cost matrix.
///
/// The legacy storage format overloaded the number 0: the constraint layer
/// read it as "unavailable" while the pricing engine read it as "free".
/// The tri-state makes the distinction explicit. `Unset` means the
/// combination was never configured; `Disabled` means an administrator
/// soft-disabled it by zeroing the price; `Priced` is a chargeable amount
/// in the smallest currency unit.
///
/// Serialization keeps the legacy wire format: `Disabled` is written as `0`,
/// `Priced(n)` as `n`, and `Unset` cells are omitted from their parent map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceCell {
    /// The combination is not configured.
    #[default]
    Unset,
    /// The combination is configured but switched off (stored as price 0).
    Disabled,
    /// The combination is chargeable at this amount.
    Priced(i64),
}

impl PriceCell {
    /// Returns true if the cell was never configured.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the chargeable amount, if any.
    ///
    /// `Unset` and `Disabled` cells are both unavailable for pricing.
    #[must_use]
    pub const fn amount(&self) -> Option<i64> {
        match self {
            Self::Priced(amount) => Some(*amount),
            Self::Unset | Self::Disabled => None,
        }
    }

    /// Builds a cell from the legacy numeric representation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativePrice`] for negative amounts.
    pub const fn from_legacy(amount: i64) -> Result<Self, DomainError> {
        match amount {
            0 => Ok(Self::Disabled),
            n if n > 0 => Ok(Self::Priced(n)),
            n => Err(DomainError::NegativePrice(n)),
        }
    }
}

impl Serialize for PriceCell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Unset cells are skipped by their containing struct; an Unset that
        // does reach the wire degrades to the legacy "unavailable" marker.
        match self {
            Self::Unset | Self::Disabled => serializer.serialize_i64(0),
            Self::Priced(amount) => serializer.serialize_i64(*amount),
        }
    }
}

impl<'de> Deserialize<'de> for PriceCell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount: i64 = i64::deserialize(deserializer)?;
        Self::from_legacy(amount).map_err(serde::de::Error::custom)
    }
}

/// Print mode for interior pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// Black-and-white printing.
    Bw,
    /// Color printing.
    Color,
}

impl PrintMode {
    /// Converts this print mode to its canonical wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bw => "bw",
            Self::Color => "color",
        }
    }
}

impl FromStr for PrintMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bw" => Ok(Self::Bw),
            "color" => Ok(Self::Color),
            _ => Err(DomainError::InvalidPrintMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for PrintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-page unit prices for one `(paper type, weight)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrintModeCosts {
    /// Black-and-white per-page price.
    #[serde(default, skip_serializing_if = "PriceCell::is_unset")]
    pub bw: PriceCell,
    /// Color per-page price.
    #[serde(default, skip_serializing_if = "PriceCell::is_unset")]
    pub color: PriceCell,
}

impl PrintModeCosts {
    /// Returns the cell for the requested print mode.
    #[must_use]
    pub const fn cell(&self, mode: PrintMode) -> PriceCell {
        match mode {
            PrintMode::Bw => self.bw,
            PrintMode::Color => self.color,
        }
    }

    /// Returns true if at least one print mode is chargeable.
    #[must_use]
    pub const fn has_priced_mode(&self) -> bool {
        self.bw.amount().is_some() || self.color.amount().is_some()
    }
}

/// Cost formula selector for an extra service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraPricingMode {
    /// One flat charge per order regardless of quantity.
    Fixed,
    /// One charge per printed book.
    PerUnit,
    /// One charge per `step` total printed pages across the order, rounded up.
    PageBased,
}

impl ExtraPricingMode {
    /// Converts this pricing mode to its canonical wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::PerUnit => "per_unit",
            Self::PageBased => "page_based",
        }
    }
}

impl FromStr for ExtraPricingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "per_unit" => Ok(Self::PerUnit),
            "page_based" => Ok(Self::PageBased),
            _ => Err(DomainError::InvalidExtraPricingMode(s.to_string())),
        }
    }
}

/// Price configuration for one optional add-on service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCharge {
    /// The charge amount; its meaning depends on `mode`.
    pub price: i64,
    /// The cost formula to apply.
    #[serde(rename = "type")]
    pub mode: ExtraPricingMode,
    /// Page step for `page_based` charges. Ignored by the other modes.
    #[serde(default)]
    pub step: u32,
}

/// Forbidden print modes for one paper type.
///
/// `all_weights` applies to the paper type as a whole; `per_weight` refines
/// the exclusion for individual weights. The pricing engine consults both;
/// the constraint layer uses the refinement to narrow per-weight options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrintModeRestriction {
    /// Print modes forbidden for every weight of this paper type.
    #[serde(default)]
    pub all_weights: Vec<PrintMode>,
    /// Additional forbidden print modes keyed by weight.
    #[serde(default)]
    pub per_weight: BTreeMap<String, Vec<PrintMode>>,
}

impl PrintModeRestriction {
    /// Returns true if `mode` is forbidden for the given weight.
    #[must_use]
    pub fn forbids(&self, weight: &str, mode: PrintMode) -> bool {
        self.all_weights.contains(&mode)
            || self
                .per_weight
                .get(weight)
                .is_some_and(|modes| modes.contains(&mode))
    }
}

/// Exception lists excluding option combinations from being offered or priced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Restrictions {
    /// Paper types never offered for this book size.
    #[serde(default)]
    pub forbidden_paper_types: Vec<String>,
    /// Binding types never offered for this book size.
    #[serde(default)]
    pub forbidden_binding_types: Vec<String>,
    /// Forbidden print modes keyed by paper type.
    #[serde(default)]
    pub forbidden_print_types: BTreeMap<String, PrintModeRestriction>,
    /// Cover weights not offered for a binding type.
    #[serde(default)]
    pub forbidden_cover_weights: BTreeMap<String, Vec<String>>,
    /// Extra services not offered with a binding type.
    #[serde(default)]
    pub forbidden_extras: BTreeMap<String, Vec<String>>,
}

impl Restrictions {
    /// Returns true if the paper type is on the exception list.
    #[must_use]
    pub fn paper_forbidden(&self, paper_type: &str) -> bool {
        self.forbidden_paper_types.iter().any(|p| p == paper_type)
    }

    /// Returns true if the binding type is on the exception list.
    #[must_use]
    pub fn binding_forbidden(&self, binding_type: &str) -> bool {
        self.forbidden_binding_types.iter().any(|b| b == binding_type)
    }

    /// Returns true if `mode` is forbidden for the `(paper, weight)` pair.
    #[must_use]
    pub fn print_mode_forbidden(&self, paper_type: &str, weight: &str, mode: PrintMode) -> bool {
        self.forbidden_print_types
            .get(paper_type)
            .is_some_and(|restriction| restriction.forbids(weight, mode))
    }

    /// Returns true if the cover weight is excluded for the binding type.
    #[must_use]
    pub fn cover_weight_forbidden(&self, binding_type: &str, weight: &str) -> bool {
        self.forbidden_cover_weights
            .get(binding_type)
            .is_some_and(|weights| weights.iter().any(|w| w == weight))
    }

    /// Returns true if the extra service is excluded for the binding type.
    #[must_use]
    pub fn extra_forbidden(&self, binding_type: &str, extra_name: &str) -> bool {
        self.forbidden_extras
            .get(binding_type)
            .is_some_and(|extras| extras.iter().any(|e| e == extra_name))
    }
}

/// Advisory quantity bounds for the order form.
///
/// These shape the quantity selector in the UI; the pricing engine itself
/// does not enforce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantityConstraints {
    /// Smallest orderable quantity.
    #[serde(default)]
    pub minimum_quantity: u32,
    /// Largest orderable quantity (0 means unbounded).
    #[serde(default)]
    pub maximum_quantity: u32,
    /// Quantity selector step.
    #[serde(default)]
    pub quantity_step: u32,
}

/// Admin-facing status of a configured matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixStatus {
    /// Complete and offered to end users.
    Active,
    /// Persisted but incomplete; hidden from the order form.
    Disabled,
}

impl MatrixStatus {
    /// Converts this status to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for MatrixStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete pricing configuration for one book size.
///
/// Matrices are owned by the repository that loaded them; engines hold
/// read-only borrows and never mutate a matrix in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingMatrix {
    /// The book-size label this matrix prices (free text, may be non-ASCII).
    pub book_size: String,
    /// Per-page unit prices: paper type → weight → print-mode cells. Sparse.
    #[serde(default)]
    pub page_costs: BTreeMap<String, BTreeMap<String, PrintModeCosts>>,
    /// Flat per-book price keyed by binding type.
    #[serde(default)]
    pub binding_costs: BTreeMap<String, i64>,
    /// Flat per-book cover price. Size-level only; not parametrized further.
    #[serde(default)]
    pub cover_cost: i64,
    /// Cover stock weights available for this size.
    #[serde(default)]
    pub cover_weights: Vec<String>,
    /// Optional add-on services keyed by name.
    #[serde(default)]
    pub extras_costs: BTreeMap<String, ExtraCharge>,
    /// Exception lists.
    #[serde(default)]
    pub restrictions: Restrictions,
    /// Fraction applied multiplicatively to the post-discount subtotal.
    #[serde(default)]
    pub profit_margin: f64,
    /// Advisory quantity bounds.
    #[serde(default)]
    pub quantity_constraints: QuantityConstraints,
}

impl PricingMatrix {
    /// Creates an empty (incomplete) matrix for a book size.
    #[must_use]
    pub fn new(book_size: impl Into<String>) -> Self {
        Self {
            book_size: book_size.into(),
            page_costs: BTreeMap::new(),
            binding_costs: BTreeMap::new(),
            cover_cost: 0,
            cover_weights: Vec::new(),
            extras_costs: BTreeMap::new(),
            restrictions: Restrictions::default(),
            profit_margin: 0.0,
            quantity_constraints: QuantityConstraints::default(),
        }
    }

    /// Returns the price cell for a `(paper, weight, mode)` tuple.
    ///
    /// Missing paper types or weights resolve to [`PriceCell::Unset`].
    #[must_use]
    pub fn page_cost(&self, paper_type: &str, weight: &str, mode: PrintMode) -> PriceCell {
        self.page_costs
            .get(paper_type)
            .and_then(|weights| weights.get(weight))
            .map_or(PriceCell::Unset, |costs| costs.cell(mode))
    }

    /// Returns the weight table for a paper type, if configured.
    #[must_use]
    pub fn weights_for(&self, paper_type: &str) -> Option<&BTreeMap<String, PrintModeCosts>> {
        self.page_costs.get(paper_type)
    }

    /// A matrix is complete when it can price at least one full combination:
    /// one paper type with one weight carrying a chargeable print mode, and
    /// at least one binding cost.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let has_priced_page: bool = self
            .page_costs
            .values()
            .flat_map(BTreeMap::values)
            .any(PrintModeCosts::has_priced_mode);

        has_priced_page && !self.binding_costs.is_empty()
    }

    /// Admin-facing status derived from the completeness invariant.
    ///
    /// Incomplete matrices are excluded from the sizes offered to end users
    /// but stay visible to administrators as `Disabled`.
    #[must_use]
    pub fn status(&self) -> MatrixStatus {
        if self.is_complete() {
            MatrixStatus::Active
        } else {
            MatrixStatus::Disabled
        }
    }
}
