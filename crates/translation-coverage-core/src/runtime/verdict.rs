// crates/translation-coverage-core/src/runtime/verdict.rs
// ============================================================================
// Module: Translation Coverage Verdict
// Description: Immutable result of a coverage check.
// Purpose: Record pass/fail, failing locales, and per-locale resolutions.
// Dependencies: crate::core, crate::runtime::report, serde
// ============================================================================

//! ## Overview
//! A [`Verdict`] is produced fresh by every check and never mutated. It
//! carries everything the report functions need, so descriptions and
//! failure details are pure functions of the verdict.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::identifiers::LocaleId;
use crate::core::identifiers::TranslationKey;
use crate::core::keys::CandidateKeys;
use crate::core::locales::LocaleSet;
use crate::core::subject::Subject;
use crate::runtime::report;

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Outcome of checking one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleResolution {
    /// Locale that was checked.
    pub locale: LocaleId,
    /// First candidate that resolved, if any.
    pub resolved_key: Option<TranslationKey>,
}

impl LocaleResolution {
    /// Returns whether some candidate resolved in this locale.
    #[must_use]
    pub const fn is_covered(&self) -> bool {
        self.resolved_key.is_some()
    }
}

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Aggregated coverage result for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Candidate keys and the subject they were generated for.
    candidates: CandidateKeys,
    /// Locales that were tested, in input order.
    tested_locales: LocaleSet,
    /// Locales with no resolving candidate, in input order.
    failing_locales: Vec<LocaleId>,
    /// Per-locale resolutions, in input order.
    resolutions: Vec<LocaleResolution>,
    /// True when every tested locale is covered.
    passed: bool,
}

impl Verdict {
    /// Builds a verdict from per-locale resolutions.
    pub(crate) fn from_resolutions(
        candidates: CandidateKeys,
        tested_locales: LocaleSet,
        resolutions: Vec<LocaleResolution>,
    ) -> Self {
        let failing_locales: Vec<LocaleId> = resolutions
            .iter()
            .filter(|resolution| !resolution.is_covered())
            .map(|resolution| resolution.locale.clone())
            .collect();
        let passed = failing_locales.is_empty();
        Self {
            candidates,
            tested_locales,
            failing_locales,
            resolutions,
            passed,
        }
    }

    /// Returns whether every tested locale is covered.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the subject the check was about.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        self.candidates.subject()
    }

    /// Returns the candidate keys that were tried.
    #[must_use]
    pub const fn candidates(&self) -> &CandidateKeys {
        &self.candidates
    }

    /// Returns the tested locales.
    #[must_use]
    pub const fn tested_locales(&self) -> &LocaleSet {
        &self.tested_locales
    }

    /// Returns the failing locales in input order.
    #[must_use]
    pub fn failing_locales(&self) -> &[LocaleId] {
        &self.failing_locales
    }

    /// Returns the per-locale resolutions in input order.
    #[must_use]
    pub fn resolutions(&self) -> &[LocaleResolution] {
        &self.resolutions
    }

    /// Returns the key that resolved `locale`, if it was tested and covered.
    #[must_use]
    pub fn resolved_key(&self, locale: &LocaleId) -> Option<&TranslationKey> {
        self.resolutions
            .iter()
            .find(|resolution| &resolution.locale == locale)
            .and_then(|resolution| resolution.resolved_key.as_ref())
    }

    /// Returns the one-line expectation description.
    #[must_use]
    pub fn description(&self) -> String {
        report::describe(self)
    }

    /// Returns the multi-line failure detail.
    #[must_use]
    pub fn failure_detail(&self) -> String {
        report::failure_detail(self)
    }
}
