// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Pressrun pricing system.
//!
//! This crate stores all pricing configuration in one key-value table
//! (`config_entries`) over Diesel with a `SQLite` backend. Values are opaque
//! JSON strings from the store's perspective; (de)serialization belongs to
//! the callers of the typed accessors.
//!
//! ## Caching discipline
//!
//! Both caches in this crate are **read-through, explicit-invalidate**:
//! reads populate from storage on first miss, and the component that writes
//! through a cache invalidates that same cache in the same logical
//! operation. There are no TTLs and no automatic invalidation. The caches
//! are plain struct fields — no statics — so their lifetime is exactly the
//! lifetime of the owning store, and tests never observe each other's
//! state.
//!
//! Sharing one store across processes is not supported: a writer in another
//! process cannot invalidate this process's cache.
//!
//! ## Testing
//!
//! Standard tests run against in-memory `SQLite` databases; no external
//! infrastructure is required.

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod repository;
mod schema;
mod settings;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use repository::{MATRIX_KEY_PREFIX, MatrixRepository, book_size_from_key, matrix_key};
pub use settings::{
    KEY_BOOK_SIZES, KEY_ENGINE_V2_ENABLED, KEY_LEGACY_RATES, KEY_QUANTITY_DISCOUNTS,
};
pub use store::ConfigStore;
