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

mod calculator;
mod constraints;
mod engine;
mod error;
mod explain;
mod legacy;
mod params;

#[cfg(test)]
mod tests;

pub use calculator::PriceCalculator;
pub use constraints::{
    AllowedOptions, BindingOption, PaperOption, PartialSelection, allowed_options,
};
pub use engine::calculate_price;
pub use error::PricingError;
pub use explain::{CombinationReport, validate_combination};
pub use legacy::{LegacyPrintCosts, LegacyRates, calculate_legacy_price};
pub use params::{MAX_PAGE_COUNT, OrderParameters, RawOrderInput};
