//! Free-text location → canonical country name.
//!
//! Resolution order (first match wins):
//! 1. city table (`"london"` → `"UK"`)
//! 2. alias table (`"great britain"` → `"UK"`)
//! 3. catalog country set, case-insensitive (`"japan"` → `"Japan"`)
//! 4. title-cased input as a best-effort guess (`"narnia"` → `"Narnia"`)
//!
//! Matching is exact after lowercasing and trimming; there is no fuzzy or
//! partial matching.

use crate::data::{CITY_COUNTRY, COUNTRY_ALIASES};
use crate::index::Catalog;

/// Normalize a location against the built-in catalog.
///
/// Returns `None` for empty (or whitespace-only) input, which callers treat
/// as "no country filter".
pub fn normalize_country(input: &str) -> Option<String> {
    normalize_country_in(&Catalog::builtin(), input)
}

/// Normalize a location, using `catalog`'s country set for step 3.
pub fn normalize_country_in(catalog: &Catalog, input: &str) -> Option<String> {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(country) = lookup(CITY_COUNTRY, &key) {
        return Some(country.to_string());
    }

    if let Some(country) = lookup(COUNTRY_ALIASES, &key) {
        return Some(country.to_string());
    }

    if let Some(country) = catalog.countries().find(|c| c.to_lowercase() == key) {
        return Some(country.to_string());
    }

    Some(title_case(&key))
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, country)| *country)
}

/// Upper-case the first letter of every word, lower-case the rest.
///
/// A "word" starts after any non-alphabetic character, so `"new zealand"`
/// becomes `"New Zealand"` and `"guinea-bissau"` becomes `"Guinea-Bissau"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !c.is_alphabetic();
    }
    out
}
