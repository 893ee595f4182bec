// crates/translation-coverage-providers/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared fixtures for file catalog tests.
// Purpose: Provide reusable locale trees and filesystem helpers.
// Dependencies: translation-coverage-core, tempfile
// ============================================================================

//! ## Overview
//! Helpers for writing locale documents into temporary directories and for
//! building lookup arguments.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use translation_coverage_core::LocaleId;
use translation_coverage_core::TranslationKey;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Rails-style English locale tree with model, attribute, and error entries.
pub const EN_YAML: &str = "\
en:
  activerecord:
    models:
      widget:
        one: Widget
        other: Widgets
    attributes:
      widget:
        title: Title
        notes: ~
    errors:
      messages:
        taken: has already been taken
";

/// French locale tree in JSON form.
pub const FR_JSON: &str = r#"{
  "fr": {
    "activerecord": { "attributes": { "widget": { "title": "Titre" } } },
    "errors": { "messages": { "blank": "doit être rempli(e)" } }
  }
}"#;

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Shorthand for a locale identifier.
pub fn locale(id: &str) -> LocaleId {
    LocaleId::new(id)
}

/// Shorthand for a translation key.
pub fn key(text: &str) -> TranslationKey {
    TranslationKey::new(text)
}
