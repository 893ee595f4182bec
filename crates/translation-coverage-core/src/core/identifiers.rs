// crates/translation-coverage-core/src/core/identifiers.rs
// ============================================================================
// Module: Translation Coverage Identifiers
// Description: Locale and translation key identifiers plus identifier normalization.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Locale and key identifiers are opaque and serialize as strings. Subject
//! identifiers (class, attribute, action, message names) are normalized into
//! lowercase snake case by [`normalize_identifier`] before they are spliced
//! into candidate keys.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Locale identifier (for example `en`, `fr`, `pt-BR`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Creates a new locale identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocaleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Dotted translation lookup key (for example `activerecord.models.widget`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Creates a new translation key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TranslationKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TranslationKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Strips surrounding whitespace and a single leading `:` (symbol form).
#[must_use]
pub fn display_form(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix(':').map_or(trimmed, str::trim)
}

/// Normalizes a raw identifier into lowercase snake case.
///
/// Follows the conventional `underscore` inflection: `::` becomes `/`, an
/// underscore is inserted at lower-to-upper and acronym-to-word boundaries,
/// dashes and whitespace become underscores, and the result is lowercased.
/// Already normalized input is returned unchanged.
///
/// ```
/// use translation_coverage_core::normalize_identifier;
///
/// assert_eq!(normalize_identifier("MyTranslatedModel"), "my_translated_model");
/// assert_eq!(normalize_identifier(":HTMLParser"), "html_parser");
/// assert_eq!(normalize_identifier("Admin::UsersController"), "admin/users_controller");
/// assert_eq!(normalize_identifier("out_of_range"), "out_of_range");
/// ```
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    let source = display_form(raw).replace("::", "/");
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        if current == '-' || current.is_whitespace() {
            out.push('_');
            continue;
        }
        if current.is_uppercase() && index > 0 {
            let previous = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            let word_boundary = previous.is_lowercase() || previous.is_ascii_digit();
            let acronym_boundary = previous.is_uppercase() && next_is_lower;
            if word_boundary || acronym_boundary {
                out.push('_');
            }
        }
        out.extend(current.to_lowercase());
    }

    out
}
