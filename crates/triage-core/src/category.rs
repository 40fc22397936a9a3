//! # Category Suggestion
//!
//! Ranks categories by how many of their keywords occur in the text.

use crate::primitives::MAX_SUGGESTED_CATEGORIES;
use crate::tables::{CATEGORY_TABLE, Category};

/// Number of keywords of `category` that occur as substrings of `text`.
#[must_use]
pub fn keyword_hits(category: &Category, text: &str) -> usize {
    category
        .keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// Every category with at least one hit, best first.
///
/// Equal counts keep table declaration order (stable sort).
#[must_use]
pub fn ranked_categories(text: &str) -> Vec<(&'static str, usize)> {
    let mut scored: Vec<(&'static str, usize)> = CATEGORY_TABLE
        .iter()
        .map(|category| (category.name, keyword_hits(category, text)))
        .filter(|(_, count)| *count > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

/// The top categories suggested for normalized `text`.
#[must_use]
pub fn detect_categories(text: &str) -> Vec<String> {
    ranked_categories(text)
        .into_iter()
        .take(MAX_SUGGESTED_CATEGORIES)
        .map(|(name, _)| name.to_string())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
