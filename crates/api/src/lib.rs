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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary layer for the pricing service.
//!
//! Handlers translate transport-agnostic requests into engine calls and
//! engine or persistence errors into the API error contract. Nothing in
//! this crate knows about HTTP; the server crate owns that surface.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_persistence_error, translate_pricing_error};
pub use handlers::{
    allowed_options, calculate_price, get_discounts, list_matrices, run_health_check, save_matrix,
    set_discounts, validate_combination,
};
pub use request_response::{
    AllowedOptionsRequest, AllowedOptionsResponse, CalculatePriceResponse, DiscountsResponse,
    HealthCheckResponse, ListMatricesResponse, MatrixSummary, SaveMatrixRequest,
    SaveMatrixResponse, SetDiscountsRequest, SetDiscountsResponse,
};
