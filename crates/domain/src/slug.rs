// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mapping between human-readable (often Persian) option labels and
//! canonical ASCII identifiers.
//!
//! The curated table is fixed configuration, not user data: it is compiled
//! in, cached for the process lifetime, and never invalidated. Labels
//! without a curated entry fall back to a generic slugifier.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Hand-curated label → slug pairs.
///
/// Covers the paper, binding, and book-size labels the shop actually uses.
const CURATED: &[(&str, &str)] = &[
    // Paper types
    ("تحریر", "tahrir"),
    ("گلاسه", "glasse"),
    ("بالک", "bulk"),
    ("کرافت", "kraft"),
    // Binding types
    ("شومیز", "shoomiz"),
    ("جلد سخت", "hardcover"),
    ("سیمی", "spiral"),
    ("منگنه", "stapled"),
    // Book sizes
    ("رقعی", "roghee"),
    ("وزیری", "vaziri"),
    ("خشتی", "kheshti"),
    ("رحلی", "rahli"),
    ("پالتویی", "paltoyi"),
];

static LABEL_TO_SLUG: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CURATED.iter().copied().collect());

static SLUG_TO_LABEL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CURATED.iter().map(|(label, slug)| (*slug, *label)).collect());

/// Generic fallback slugifier for labels without a curated entry.
///
/// ASCII alphanumeric runs are lowercased and joined with `-`; everything
/// else is dropped. Non-ASCII labels without a curated entry slugify to an
/// empty string, which callers treat as "no slug available".
fn slugify(label: &str) -> String {
    let mut slug: String = String::with_capacity(label.len());
    let mut pending_separator: bool = false;

    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Resolves the canonical slug for a label.
///
/// Curated entries win; unmapped labels go through the generic slugifier.
#[must_use]
pub fn label_to_slug(label: &str) -> String {
    LABEL_TO_SLUG
        .get(label)
        .map_or_else(|| slugify(label), |slug| (*slug).to_string())
}

/// Resolves the original label for a curated slug.
///
/// Only curated slugs are reversible; slugified fallbacks return `None`.
#[must_use]
pub fn slug_to_label(slug: &str) -> Option<&'static str> {
    SLUG_TO_LABEL.get(slug).copied()
}
