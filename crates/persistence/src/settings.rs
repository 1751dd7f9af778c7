// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed accessors for the well-known configuration keys.

use pressrun::LegacyRates;
use pressrun_domain::QuantityDiscountTable;

use crate::error::PersistenceError;
use crate::store::ConfigStore;

/// Feature flag selecting the matrix engine over the legacy one.
pub const KEY_ENGINE_V2_ENABLED: &str = "pricing_engine_v2_enabled";

/// Quantity discount table shared by both pricing engines.
pub const KEY_QUANTITY_DISCOUNTS: &str = "pricing_quantity_discounts";

/// Catalogue of book size labels offered by the shop.
pub const KEY_BOOK_SIZES: &str = "book_sizes";

/// Flat rate tables consumed by the legacy pricing engine.
pub const KEY_LEGACY_RATES: &str = "pricing_legacy_rates";

impl ConfigStore {
    /// Reports whether the matrix engine is enabled.
    ///
    /// An absent flag means enabled; the matrix engine is the default and
    /// the flag only exists to fall back to the legacy tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails or the stored flag is
    /// not a JSON boolean.
    pub fn engine_v2_enabled(&mut self) -> Result<bool, PersistenceError> {
        match self.get(KEY_ENGINE_V2_ENABLED)? {
            None => Ok(true),
            Some(raw) => serde_json::from_str::<bool>(&raw).map_err(|e| {
                PersistenceError::SerializationError {
                    key: KEY_ENGINE_V2_ENABLED.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Persists the matrix engine flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn set_engine_v2_enabled(&mut self, enabled: bool) -> Result<(), PersistenceError> {
        self.set(KEY_ENGINE_V2_ENABLED, if enabled { "true" } else { "false" })
    }

    /// Fetches the quantity discount table, empty if never configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails or the stored table does
    /// not parse.
    pub fn quantity_discounts(&mut self) -> Result<QuantityDiscountTable, PersistenceError> {
        match self.get(KEY_QUANTITY_DISCOUNTS)? {
            None => Ok(QuantityDiscountTable::new()),
            Some(raw) => serde_json::from_str::<QuantityDiscountTable>(&raw).map_err(|e| {
                PersistenceError::SerializationError {
                    key: KEY_QUANTITY_DISCOUNTS.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Persists the quantity discount table.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn set_quantity_discounts(
        &mut self,
        table: &QuantityDiscountTable,
    ) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(table).map_err(|e| {
            PersistenceError::SerializationError {
                key: KEY_QUANTITY_DISCOUNTS.to_string(),
                message: e.to_string(),
            }
        })?;
        self.set(KEY_QUANTITY_DISCOUNTS, &raw)
    }

    /// Fetches the book size catalogue, empty if never configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails or the stored list does
    /// not parse.
    pub fn book_sizes(&mut self) -> Result<Vec<String>, PersistenceError> {
        match self.get(KEY_BOOK_SIZES)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).map_err(|e| {
                PersistenceError::SerializationError {
                    key: KEY_BOOK_SIZES.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Persists the book size catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn set_book_sizes(&mut self, sizes: &[String]) -> Result<(), PersistenceError> {
        let raw: String =
            serde_json::to_string(sizes).map_err(|e| PersistenceError::SerializationError {
                key: KEY_BOOK_SIZES.to_string(),
                message: e.to_string(),
            })?;
        self.set(KEY_BOOK_SIZES, &raw)
    }

    /// Fetches the legacy rate tables, `None` if never configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails or the stored tables do
    /// not parse.
    pub fn legacy_rates(&mut self) -> Result<Option<LegacyRates>, PersistenceError> {
        match self.get(KEY_LEGACY_RATES)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str::<LegacyRates>(&raw).map(Some).map_err(|e| {
                PersistenceError::SerializationError {
                    key: KEY_LEGACY_RATES.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Persists the legacy rate tables.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn set_legacy_rates(&mut self, rates: &LegacyRates) -> Result<(), PersistenceError> {
        let raw: String =
            serde_json::to_string(rates).map_err(|e| PersistenceError::SerializationError {
                key: KEY_LEGACY_RATES.to_string(),
                message: e.to_string(),
            })?;
        self.set(KEY_LEGACY_RATES, &raw)
    }
}
