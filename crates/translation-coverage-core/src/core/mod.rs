// crates/translation-coverage-core/src/core/mod.rs
// ============================================================================
// Module: Translation Coverage Core Types
// Description: Subjects, locales, identifiers, and candidate key generation.
// Purpose: Provide validated, serializable inputs for coverage checks.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what a coverage check is about and where it looks:
//! the validated subject, the locales under test, and the ordered candidate
//! keys derived from both. Everything here is pure and free of I/O.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod keys;
pub mod locales;
pub mod subject;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::LocaleId;
pub use identifiers::TranslationKey;
pub use identifiers::display_form;
pub use identifiers::normalize_identifier;
pub use keys::CandidateKeys;
pub use keys::DEFAULT_CONTROLLER_NAMESPACE;
pub use keys::DEFAULT_MODEL_NAMESPACE;
pub use keys::KeyGenerator;
pub use keys::KeyNamespaces;
pub use keys::NamespaceError;
pub use keys::validate_namespace;
pub use locales::LocaleConfig;
pub use locales::LocaleError;
pub use locales::LocaleSelection;
pub use locales::LocaleSet;
pub use subject::Identifier;
pub use subject::Subject;
pub use subject::SubjectError;
pub use subject::SubjectIdentifiers;
pub use subject::SubjectRole;
pub use subject::SubjectShape;
