// crates/translation-coverage-providers/tests/proptest_catalog.rs
// ============================================================================
// Module: File Catalog Property-Based Tests
// Description: Property tests for locale tree flattening.
// Purpose: Ensure every stored leaf and its ancestors resolve after loading.
// ============================================================================

//! Property-based tests for catalog flattening.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::path::Path;

use proptest::prelude::*;
use serde_json::Map;
use serde_json::Value;
use translation_coverage_core::LocaleId;
use translation_coverage_core::TranslationKey;
use translation_coverage_core::TranslationLookup;
use translation_coverage_providers::FileCatalog;

proptest! {
    #[test]
    fn every_leaf_and_ancestor_exists(
        paths in prop::collection::btree_set(prop::collection::vec("[a-z]{1,4}", 1 .. 4), 1 .. 12),
    ) {
        let mut root = Map::new();
        let mut stored = Vec::new();
        for segments in &paths {
            if insert_leaf(&mut root, segments) {
                stored.push(segments.join("."));
            }
        }
        let mut document = Map::new();
        document.insert("en".to_string(), Value::Object(root));
        let bytes = serde_json::to_vec(&Value::Object(document)).unwrap();
        let catalog = FileCatalog::from_document(Path::new("en.json"), &bytes, false).unwrap();
        let en = LocaleId::new("en");

        for leaf in &stored {
            prop_assert!(catalog.exists(&en, &TranslationKey::new(leaf.as_str())).unwrap());
            let mut ancestor = leaf.as_str();
            while let Some((parent, _)) = ancestor.rsplit_once('.') {
                prop_assert!(catalog.exists(&en, &TranslationKey::new(parent)).unwrap());
                ancestor = parent;
            }
        }
        prop_assert!(!catalog.exists(&LocaleId::new("fr"), &TranslationKey::new("a")).unwrap());
    }
}

/// Inserts a leaf at `segments`, skipping paths that collide with existing leaves.
fn insert_leaf(root: &mut Map<String, Value>, segments: &[String]) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };
    let mut node = root;
    for segment in parents {
        let child = node.entry(segment.clone()).or_insert_with(|| Value::Object(Map::new()));
        match child {
            Value::Object(map) => node = map,
            _ => return false,
        }
    }
    if node.contains_key(last) {
        return false;
    }
    node.insert(last.clone(), Value::String("text".to_string()));
    true
}
