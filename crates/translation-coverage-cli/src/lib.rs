// crates/translation-coverage-cli/src/lib.rs
// ============================================================================
// Module: Translation Coverage CLI Library
// Description: Shared helpers for the translation-coverage command line.
// Purpose: Provide i18n, audit sinks, and manifest parsing to the binary and tests.
// Dependencies: translation-coverage-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! This library houses the pieces of the CLI that are worth testing on their
//! own: the localized message catalog, the subjects manifest, and the audit
//! sinks. The binary entry point (`src/main.rs`) wires them together.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
/// Internationalization helpers and message catalog.
pub mod i18n;
pub mod manifest;
