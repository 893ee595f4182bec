// crates/translation-coverage-core/src/interfaces/mod.rs
// ============================================================================
// Module: Translation Coverage Interfaces
// Description: Backend-agnostic translation lookup contract.
// Purpose: Define the only surface the coverage checker queries.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The checker never owns translation data. It asks a [`TranslationLookup`]
//! whether a key exists in a locale. Implementations answer `Ok(false)` for
//! missing entries and reserve `Err` for operational failures, which the
//! checker propagates unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::LocaleId;
use crate::core::identifiers::TranslationKey;

// ============================================================================
// SECTION: Translation Lookup
// ============================================================================

/// Translation lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store cannot be reached or is not loaded.
    #[error("translation store unavailable: {0}")]
    Unavailable(String),
    /// The backing store reported an error.
    #[error("translation lookup error: {0}")]
    Backend(String),
}

/// Read-only key-value lookup over a translation catalog.
pub trait TranslationLookup {
    /// Returns whether `key` resolves to a stored value in `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the store cannot answer the query.
    fn exists(&self, locale: &LocaleId, key: &TranslationKey) -> Result<bool, LookupError>;
}

impl<T: TranslationLookup + ?Sized> TranslationLookup for &T {
    fn exists(&self, locale: &LocaleId, key: &TranslationKey) -> Result<bool, LookupError> {
        (**self).exists(locale, key)
    }
}
