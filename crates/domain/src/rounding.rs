// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Integer rounding helpers used by the pricing pipeline.
//!
//! Books are bound in even-page increments, so every total page count is
//! normalized with [`round_up_to_even`] before any cost is computed.
//! Page-based extras charge once per `step` printed pages, rounded up,
//! via [`ceil_div`].

use crate::error::DomainError;

/// Rounds a page count up to the nearest even number.
///
/// Even inputs (including 0) are returned unchanged. An odd input at the
/// type limit saturates to the largest even `u32` instead of wrapping;
/// callers that care about page counts that large must bound them first.
#[must_use]
pub const fn round_up_to_even(pages: u32) -> u32 {
    if pages % 2 == 0 {
        pages
    } else {
        match pages.checked_add(1) {
            Some(even) => even,
            None => u32::MAX - 1,
        }
    }
}

/// Ceiling division.
///
/// # Errors
///
/// Returns [`DomainError::ZeroDivisor`] if `divisor` is 0. A zero step in an
/// extra-charge configuration is a configuration error, never a panic.
pub const fn ceil_div(dividend: u64, divisor: u64) -> Result<u64, DomainError> {
    if divisor == 0 {
        return Err(DomainError::ZeroDivisor { dividend });
    }
    Ok(dividend.div_ceil(divisor))
}
