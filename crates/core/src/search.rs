//! Keyword search and top-N helpers for the store app catalog.
//!
//! Search is a case-insensitive substring match over an app's name and
//! category. The SQL store and any in-process store must agree on these
//! semantics, so the normalization and the predicate live here.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Number of apps returned by the `FirstTen` listing.
pub const DEFAULT_TOP_N: u32 = 10;

// ---------------------------------------------------------------------------
// Term handling
// ---------------------------------------------------------------------------

/// Normalize a raw search term: trim surrounding whitespace, then lower-case.
///
/// Inner whitespace is kept, so a multi-word term matches as one substring.
///
/// # Examples
///
/// ```
/// use storeapps_core::search::normalize_term;
/// assert_eq!(normalize_term("  Sky Chart "), "sky chart");
/// assert_eq!(normalize_term("GAME"), "game");
/// ```
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `field` contains an already-normalized term, ignoring case.
pub fn field_contains(field: &str, normalized_term: &str) -> bool {
    field.to_lowercase().contains(normalized_term)
}

/// Whether an app with the given name and category matches a normalized term.
///
/// The predicate is a disjunction: either field containing the term is enough.
pub fn app_matches(name: &str, category: &str, normalized_term: &str) -> bool {
    field_contains(name, normalized_term) || field_contains(category, normalized_term)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
