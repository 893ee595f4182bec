// crates/translation-coverage-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog parity and locale parsing.
// Purpose: Keep the English and Catalan catalogs in step.
// Dependencies: translation-coverage-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalogs share keys and placeholders, locale
//! parsing is tolerant, and translation substitutes arguments.

use std::collections::BTreeSet;

use crate::i18n::Locale;
use crate::i18n::MessageArg;
use crate::i18n::SUPPORTED_LOCALES;
use crate::i18n::catalog_entries_for;
use crate::i18n::catalog_for;
use crate::i18n::translate;

/// Extracts `{name}` placeholders, rejecting malformed braces.
fn parse_placeholder_names(template: &str) -> Result<BTreeSet<String>, String> {
    let mut placeholders = BTreeSet::new();
    let bytes = template.as_bytes();
    let mut index = 0usize;
    while index < bytes.len() {
        match bytes[index] {
            b'{' => {
                let mut end = index + 1;
                while end < bytes.len() && bytes[end] != b'}' {
                    if bytes[end] == b'{' {
                        return Err(format!("nested '{{' at byte {end}"));
                    }
                    end += 1;
                }
                if end >= bytes.len() {
                    return Err(format!("unclosed '{{' at byte {index}"));
                }
                let name = &template[index + 1 .. end];
                if name.is_empty() {
                    return Err(format!("empty placeholder at byte {index}"));
                }
                let mut chars = name.chars();
                let Some(first) = chars.next() else {
                    return Err(format!("empty placeholder at byte {index}"));
                };
                if !first.is_ascii_lowercase() {
                    return Err(format!(
                        "placeholder '{name}' at byte {index} must start with lowercase ASCII \
                         letter"
                    ));
                }
                if chars.any(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')) {
                    return Err(format!("placeholder '{name}' at byte {index} must use [a-z0-9_]"));
                }
                placeholders.insert(name.to_string());
                index = end + 1;
            }
            b'}' => {
                return Err(format!("unmatched '}}' at byte {index}"));
            }
            _ => {
                index += 1;
            }
        }
    }
    Ok(placeholders)
}

#[test]
fn catalogs_have_matching_keys() {
    let en_keys: BTreeSet<&'static str> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let locale_keys: BTreeSet<&'static str> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, locale_keys, "locale catalogs must stay in parity ({locale:?})");
    }
}

#[test]
fn catalogs_have_unique_keys_per_locale() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let unique: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate catalog keys in {locale:?}");
    }
}

#[test]
fn catalogs_share_placeholders_with_english() {
    for (key, en_template) in catalog_entries_for(Locale::En) {
        let expected = parse_placeholder_names(en_template)
            .unwrap_or_else(|error| panic!("invalid placeholder in '{key}' (En): {error}"));
        for locale in SUPPORTED_LOCALES {
            let template = catalog_for(*locale)
                .get(key)
                .copied()
                .unwrap_or_else(|| panic!("missing key '{key}' in {locale:?}"));
            let actual = parse_placeholder_names(template).unwrap_or_else(|error| {
                panic!("invalid placeholder in '{key}' ({locale:?}): {error}")
            });
            assert_eq!(expected, actual, "placeholder mismatch for '{key}' in {locale:?}");
        }
    }
}

#[test]
fn catalan_differs_for_curated_keys() {
    for key in ["config.validate.ok", "check.result.fail", "i18n.disclaimer.machine_translated"] {
        let en = catalog_for(Locale::En).get(key).copied().expect("en key exists");
        let ca = catalog_for(Locale::Ca).get(key).copied().expect("ca key exists");
        assert_ne!(en, ca, "Catalan must differ from English for '{key}'");
    }
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("EN-us"), Some(Locale::En));
    assert_eq!(Locale::parse("ca_ES"), Some(Locale::Ca));
    assert_eq!(Locale::parse("  ca "), Some(Locale::Ca));
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("fr"), None);
}

#[test]
fn translate_substitutes_placeholders() {
    let output = translate(
        "manifest.load_failed",
        vec![MessageArg::new("path", "subjects.toml"), MessageArg::new("error", "boom")],
    );
    assert!(output.contains("subjects.toml"));
    assert!(output.contains("boom"));
    assert!(!output.contains('{'));
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}
