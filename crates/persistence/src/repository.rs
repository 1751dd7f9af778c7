// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage and retrieval of pricing matrices.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use pressrun_domain::PricingMatrix;
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::PersistenceError;
use crate::store::ConfigStore;

/// Prefix shared by every matrix key in the configuration store.
pub const MATRIX_KEY_PREFIX: &str = "pricing_matrix_";

/// Builds the storage key for a book size.
///
/// Book size labels are arbitrary text, often non-Latin. Encoding them
/// keeps the key safe for any storage layer regardless of the label's
/// alphabet or punctuation.
#[must_use]
pub fn matrix_key(book_size: &str) -> String {
    let encoded: String = URL_SAFE_NO_PAD.encode(book_size.as_bytes());
    format!("{MATRIX_KEY_PREFIX}{encoded}")
}

/// Recovers the book size label from a storage key.
///
/// Returns `None` if the key lacks the matrix prefix or the encoded
/// portion does not decode to valid UTF-8.
#[must_use]
pub fn book_size_from_key(key: &str) -> Option<String> {
    let encoded: &str = key.strip_prefix(MATRIX_KEY_PREFIX)?;
    let bytes: Vec<u8> = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

/// Read-through repository of pricing matrices, keyed by book size.
///
/// Owns the [`ConfigStore`] it persists through. The full matrix set is
/// decoded once on first bulk access and held until a write invalidates it.
pub struct MatrixRepository {
    store: ConfigStore,
    matrices: Option<BTreeMap<String, PricingMatrix>>,
}

impl MatrixRepository {
    /// Wraps a configuration store in a matrix repository.
    #[must_use]
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            matrices: None,
        }
    }

    /// Grants access to the underlying configuration store.
    ///
    /// Writes made through the store directly do not invalidate the matrix
    /// cache; use [`Self::save_matrix`] for matrix keys.
    pub fn store(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// Fetches the matrix for a book size, `None` if not configured.
    ///
    /// The first lookup loads every stored matrix in one bulk fetch; later
    /// lookups are served from that map until a write drops it.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub fn get_matrix(
        &mut self,
        book_size: &str,
    ) -> Result<Option<PricingMatrix>, PersistenceError> {
        let matrices: &BTreeMap<String, PricingMatrix> = self.all_matrices()?;
        Ok(matrices.get(book_size).cloned())
    }

    /// Persists the matrix for a book size, replacing any prior version.
    ///
    /// The bulk cache is dropped only after the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_matrix(
        &mut self,
        book_size: &str,
        matrix: &PricingMatrix,
    ) -> Result<(), PersistenceError> {
        let key: String = matrix_key(book_size);
        let raw: String =
            serde_json::to_string(matrix).map_err(|e| PersistenceError::SerializationError {
                key: key.clone(),
                message: e.to_string(),
            })?;
        self.store.set(&key, &raw)?;
        self.matrices = None;
        Ok(())
    }

    /// Fetches every stored matrix, keyed by book size.
    ///
    /// Keys that do not decode to a book size, and values that do not
    /// parse as a matrix, are skipped with a warning rather than failing
    /// the whole listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub fn all_matrices(
        &mut self,
    ) -> Result<&BTreeMap<String, PricingMatrix>, PersistenceError> {
        if self.matrices.is_none() {
            let rows: Vec<(String, String)> = self.store.get_by_prefix(MATRIX_KEY_PREFIX)?;
            let mut decoded: BTreeMap<String, PricingMatrix> = BTreeMap::new();

            for (key, raw) in rows {
                let Some(book_size) = book_size_from_key(&key) else {
                    warn!(key, "Skipping matrix key that does not decode to a book size");
                    continue;
                };
                match serde_json::from_str::<PricingMatrix>(&raw) {
                    Ok(matrix) => {
                        decoded.insert(book_size, matrix);
                    }
                    Err(e) => {
                        warn!(key, error = %e, "Skipping matrix that failed to parse");
                    }
                }
            }

            self.matrices = Some(decoded);
        }

        // The branch above guarantees this never inserts.
        Ok(self.matrices.get_or_insert_with(BTreeMap::new))
    }

    /// Fetches the book sizes that have a stored matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub fn list_configured_sizes(&mut self) -> Result<Vec<String>, PersistenceError> {
        let matrices: &BTreeMap<String, PricingMatrix> = self.all_matrices()?;
        Ok(matrices.keys().cloned().collect())
    }

    /// Drops both the matrix cache and the store's key cache.
    pub fn clear_cache(&mut self) {
        self.matrices = None;
        self.store.clear_cache();
    }
}

impl std::fmt::Debug for MatrixRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixRepository")
            .field("cached", &self.matrices.is_some())
            .finish_non_exhaustive()
    }
}
