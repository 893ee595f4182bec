// crates/translation-coverage-core/src/runtime/checker.rs
// ============================================================================
// Module: Translation Coverage Checker
// Description: Per-locale candidate resolution against a lookup service.
// Purpose: Turn candidate keys and a locale set into a verdict.
// Dependencies: crate::{core, interfaces, runtime::verdict}, thiserror
// ============================================================================

//! ## Overview
//! For each locale, in input order, candidates are queried in order and the
//! first hit covers the locale; the remaining candidates for that locale are
//! skipped. Lookup errors abort the check. They are never treated as a
//! missing translation and never retried.
//!
//! ## Invariants
//! - Only read-only `exists` queries are issued; nothing is cached.
//! - Tracing observes lookups without affecting results.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::LocaleId;
use crate::core::identifiers::TranslationKey;
use crate::core::keys::CandidateKeys;
use crate::core::keys::KeyGenerator;
use crate::core::locales::LocaleConfig;
use crate::core::locales::LocaleSelection;
use crate::core::locales::LocaleSet;
use crate::core::subject::SubjectError;
use crate::core::subject::SubjectIdentifiers;
use crate::core::subject::SubjectShape;
use crate::interfaces::LookupError;
use crate::interfaces::TranslationLookup;
use crate::runtime::verdict::LocaleResolution;
use crate::runtime::verdict::Verdict;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Coverage check failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// The subject identifiers do not satisfy the shape.
    #[error("invalid subject: {0}")]
    InvalidSubject(#[from] SubjectError),
    /// The lookup service failed while answering a query.
    #[error("lookup of {key} in {locale} failed: {source}")]
    LookupFailure {
        /// Locale being queried.
        locale: LocaleId,
        /// Key being queried.
        key: TranslationKey,
        /// Underlying lookup error.
        #[source]
        source: LookupError,
    },
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Observer for individual lookups performed during a check.
pub trait CoverageTrace {
    /// Called after each successful lookup.
    fn on_lookup(&mut self, locale: &LocaleId, key: &TranslationKey, found: bool);
}

/// No-op trace hook used by [`check`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl CoverageTrace for NoopTrace {
    fn on_lookup(&mut self, _locale: &LocaleId, _key: &TranslationKey, _found: bool) {}
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Checks whether every locale in `locales` has a resolving candidate.
///
/// # Errors
///
/// Returns [`CoverageError::LookupFailure`] when the lookup service fails.
pub fn check<L>(
    candidates: &CandidateKeys,
    locales: &LocaleSet,
    lookup: &L,
) -> Result<Verdict, CoverageError>
where
    L: TranslationLookup + ?Sized,
{
    check_with_trace(candidates, locales, lookup, &mut NoopTrace)
}

/// Same as [`check`], reporting every lookup to `trace`.
///
/// # Errors
///
/// Returns [`CoverageError::LookupFailure`] when the lookup service fails.
pub fn check_with_trace<L, T>(
    candidates: &CandidateKeys,
    locales: &LocaleSet,
    lookup: &L,
    trace: &mut T,
) -> Result<Verdict, CoverageError>
where
    L: TranslationLookup + ?Sized,
    T: CoverageTrace + ?Sized,
{
    let mut resolutions = Vec::with_capacity(locales.len());
    for locale in locales {
        let resolved_key = resolve_locale(candidates, locale, lookup, trace)?;
        resolutions.push(LocaleResolution {
            locale: locale.clone(),
            resolved_key,
        });
    }
    Ok(Verdict::from_resolutions(candidates.clone(), locales.clone(), resolutions))
}

/// Returns the first candidate that exists in `locale`.
fn resolve_locale<L, T>(
    candidates: &CandidateKeys,
    locale: &LocaleId,
    lookup: &L,
    trace: &mut T,
) -> Result<Option<TranslationKey>, CoverageError>
where
    L: TranslationLookup + ?Sized,
    T: CoverageTrace + ?Sized,
{
    for key in candidates.iter() {
        let found = lookup.exists(locale, key).map_err(|source| CoverageError::LookupFailure {
            locale: locale.clone(),
            key: key.clone(),
            source,
        })?;
        trace.on_lookup(locale, key, found);
        if found {
            return Ok(Some(key.clone()));
        }
    }
    Ok(None)
}

// ============================================================================
// SECTION: Requests
// ============================================================================

/// A complete coverage request: subject shape, raw identifiers, and locale selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRequest {
    /// Subject shape.
    shape: SubjectShape,
    /// Raw identifiers, validated when the request is evaluated.
    identifiers: SubjectIdentifiers,
    /// Which locales to test.
    selection: LocaleSelection,
}

impl CoverageRequest {
    /// Creates a request that tests every available locale.
    #[must_use]
    pub fn new(shape: SubjectShape, identifiers: SubjectIdentifiers) -> Self {
        Self {
            shape,
            identifiers,
            selection: LocaleSelection::default(),
        }
    }

    /// Returns a request with the given locale selection.
    #[must_use]
    pub fn with_selection(self, selection: LocaleSelection) -> Self {
        Self {
            selection,
            ..self
        }
    }

    /// Returns the subject shape.
    #[must_use]
    pub const fn shape(&self) -> SubjectShape {
        self.shape
    }

    /// Returns the raw identifiers.
    #[must_use]
    pub const fn identifiers(&self) -> &SubjectIdentifiers {
        &self.identifiers
    }

    /// Returns the locale selection.
    #[must_use]
    pub const fn selection(&self) -> LocaleSelection {
        self.selection
    }

    /// Generates candidates, resolves locales, and checks coverage.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError`] when the subject is invalid or a lookup fails.
    pub fn evaluate<L>(
        &self,
        generator: &KeyGenerator,
        locales: &LocaleConfig,
        lookup: &L,
    ) -> Result<Verdict, CoverageError>
    where
        L: TranslationLookup + ?Sized,
    {
        self.evaluate_with_trace(generator, locales, lookup, &mut NoopTrace)
    }

    /// Same as [`CoverageRequest::evaluate`], reporting every lookup to `trace`.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError`] when the subject is invalid or a lookup fails.
    pub fn evaluate_with_trace<L, T>(
        &self,
        generator: &KeyGenerator,
        locales: &LocaleConfig,
        lookup: &L,
        trace: &mut T,
    ) -> Result<Verdict, CoverageError>
    where
        L: TranslationLookup + ?Sized,
        T: CoverageTrace + ?Sized,
    {
        let candidates = generator.generate(self.shape, &self.identifiers)?;
        let tested = locales.resolve(self.selection);
        check_with_trace(&candidates, &tested, lookup, trace)
    }
}
