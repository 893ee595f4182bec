// crates/translation-coverage-core/src/core/locales.rs
// ============================================================================
// Module: Translation Coverage Locales
// Description: Locale sets, locale configuration, and locale selection.
// Purpose: Resolve which locales a coverage check tests, without ambient state.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`LocaleConfig`] holds the default locale and the ordered available
//! locales supplied by the environment. A [`LocaleSelection`] is an
//! immutable choice between the default locale only and every available
//! locale; resolving it yields the [`LocaleSet`] a check iterates over.
//!
//! ## Invariants
//! - A [`LocaleSet`] is non-empty, ordered, and free of duplicates.
//! - The default locale is always a member of the available locales.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::LocaleId;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Locale set and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// No locales were supplied.
    #[error("locale set must not be empty")]
    Empty,
    /// A locale identifier is blank or contains whitespace.
    #[error("locale identifier '{0}' is invalid")]
    Invalid(String),
    /// A locale appears more than once.
    #[error("locale {0} is listed more than once")]
    Duplicate(LocaleId),
    /// The default locale is missing from the available locales.
    #[error("default locale {0} is not one of the available locales")]
    DefaultNotAvailable(LocaleId),
}

// ============================================================================
// SECTION: Locale Set
// ============================================================================

/// Ordered, non-empty, duplicate-free set of locales to test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleSet(Vec<LocaleId>);

impl LocaleSet {
    /// Builds a locale set, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] when the list is empty, holds a blank
    /// identifier, or repeats a locale.
    pub fn new(locales: Vec<LocaleId>) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }
        for (index, locale) in locales.iter().enumerate() {
            let text = locale.as_str();
            if text.is_empty() || text.chars().any(char::is_whitespace) {
                return Err(LocaleError::Invalid(text.to_string()));
            }
            if locales[.. index].contains(locale) {
                return Err(LocaleError::Duplicate(locale.clone()));
            }
        }
        Ok(Self(locales))
    }

    /// Builds a single-locale set.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Invalid`] when the identifier is blank.
    pub fn single(locale: LocaleId) -> Result<Self, LocaleError> {
        Self::new(vec![locale])
    }

    /// Returns the locales in order.
    #[must_use]
    pub fn as_slice(&self) -> &[LocaleId] {
        &self.0
    }

    /// Iterates over the locales in order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleId> {
        self.0.iter()
    }

    /// Returns the number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the set contains `locale`.
    #[must_use]
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.0.contains(locale)
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type IntoIter = std::slice::Iter<'a, LocaleId>;
    type Item = &'a LocaleId;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Which locales a coverage check tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSelection {
    /// Only the default locale.
    DefaultOnly,
    /// Every available locale (default).
    #[default]
    AllAvailable,
}

// ============================================================================
// SECTION: Locale Configuration
// ============================================================================

/// Default and available locales supplied by the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Default locale.
    default_locale: LocaleId,
    /// Ordered available locales, including the default.
    available_locales: LocaleSet,
}

impl LocaleConfig {
    /// Creates a locale configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::DefaultNotAvailable`] when the default locale is
    /// not one of the available locales.
    pub fn new(
        default_locale: LocaleId,
        available_locales: LocaleSet,
    ) -> Result<Self, LocaleError> {
        if !available_locales.contains(&default_locale) {
            return Err(LocaleError::DefaultNotAvailable(default_locale));
        }
        Ok(Self {
            default_locale,
            available_locales,
        })
    }

    /// Creates a configuration with a single locale that is both default and available.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Invalid`] when the identifier is blank.
    pub fn single(locale: LocaleId) -> Result<Self, LocaleError> {
        let available = LocaleSet::single(locale.clone())?;
        Self::new(locale, available)
    }

    /// Returns the default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &LocaleId {
        &self.default_locale
    }

    /// Returns the available locales.
    #[must_use]
    pub const fn available_locales(&self) -> &LocaleSet {
        &self.available_locales
    }

    /// Resolves a selection into the locale set to test.
    #[must_use]
    pub fn resolve(&self, selection: LocaleSelection) -> LocaleSet {
        match selection {
            LocaleSelection::DefaultOnly => LocaleSet(vec![self.default_locale.clone()]),
            LocaleSelection::AllAvailable => self.available_locales.clone(),
        }
    }
}
