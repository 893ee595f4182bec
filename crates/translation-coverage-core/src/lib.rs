// crates/translation-coverage-core/src/lib.rs
// ============================================================================
// Module: Translation Coverage Core Library
// Description: Public API surface for the translation coverage engine.
// Purpose: Expose subjects, key generation, the lookup interface, and checks.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Translation coverage answers one question: does a subject (a model, an
//! attribute, a flash message, a validation error) have a translation in
//! every locale under test? Candidate keys are generated from a fixed,
//! ordered template family per subject shape, then resolved per locale
//! against an injected [`TranslationLookup`]. The result is an immutable
//! [`Verdict`] with stable report text.
//!
//! The core performs no I/O and holds no ambient locale state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::LookupError;
pub use interfaces::TranslationLookup;
pub use runtime::CoverageError;
pub use runtime::CoverageRequest;
pub use runtime::CoverageTrace;
pub use runtime::InMemoryCatalog;
pub use runtime::LocaleResolution;
pub use runtime::NoopTrace;
pub use runtime::Verdict;
pub use runtime::check;
pub use runtime::check_with_trace;
