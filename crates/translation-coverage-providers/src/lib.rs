// crates/translation-coverage-providers/src/lib.rs
// ============================================================================
// Module: Translation Coverage Providers
// Description: Translation lookup services backed by locale files.
// Purpose: Supply the coverage checker with real catalog data.
// Dependencies: translation-coverage-core, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! Providers implement [`translation_coverage_core::TranslationLookup`] over
//! external data. The file catalog reads Rails-style locale trees from YAML
//! and JSON files with strict size limits.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogConfig;
pub use catalog::CatalogError;
pub use catalog::DEFAULT_MAX_BYTES;
pub use catalog::FileCatalog;
