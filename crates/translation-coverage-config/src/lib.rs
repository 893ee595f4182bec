// crates/translation-coverage-config/src/lib.rs
// ============================================================================
// Module: Translation Coverage Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for translation-coverage.toml semantics.
// Dependencies: translation-coverage-core, serde, toml
// ============================================================================

//! ## Overview
//! `translation-coverage-config` defines the configuration model for
//! coverage checks: locales, key namespaces, catalog sources, and audit
//! output. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
