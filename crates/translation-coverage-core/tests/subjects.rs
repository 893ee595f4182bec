// crates/translation-coverage-core/tests/subjects.rs
// ============================================================================
// Module: Subject Validation Tests
// Description: Identifier normalization and subject role validation.
// Purpose: Ensure subjects are normalized once and never degrade shapes.
// Dependencies: translation-coverage-core
// ============================================================================

//! Subject, identifier, and locale validation tests.

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

use translation_coverage_core::LocaleConfig;
use translation_coverage_core::LocaleError;
use translation_coverage_core::LocaleId;
use translation_coverage_core::LocaleSelection;
use translation_coverage_core::LocaleSet;
use translation_coverage_core::Subject;
use translation_coverage_core::SubjectError;
use translation_coverage_core::SubjectRole;
use translation_coverage_core::SubjectShape;
use translation_coverage_core::normalize_identifier;

fn locales(ids: &[&str]) -> LocaleSet {
    LocaleSet::new(ids.iter().map(|id| LocaleId::new(*id)).collect()).unwrap()
}

#[test]
fn symbol_and_string_forms_normalize_identically() {
    let from_symbol = Subject::model_attribute(":Widget", ":Title").unwrap();
    let from_string = Subject::model_attribute("widget", "title").unwrap();
    for role in [SubjectRole::Subject, SubjectRole::Member] {
        assert_eq!(from_symbol.role_key(role), from_string.role_key(role));
    }
}

#[test]
fn class_names_follow_underscore_inflection() {
    assert_eq!(normalize_identifier("MyTranslatedModel"), "my_translated_model");
    assert_eq!(normalize_identifier("HTMLParser"), "html_parser");
    assert_eq!(normalize_identifier("Admin::UsersController"), "admin/users_controller");
    assert_eq!(normalize_identifier("already_snake"), "already_snake");
}

#[test]
fn labels_keep_display_form() {
    let subject = Subject::error_attribute("MyTranslatedModel", ":content", ":no_default").unwrap();
    assert_eq!(subject.label(), "MyTranslatedModel#content");
    assert_eq!(subject.topic().unwrap().display(), "no_default");
    assert_eq!(Subject::error("MyTranslatedModel", "taken").unwrap().label(), "MyTranslatedModel");
}

#[test]
fn empty_and_dotted_identifiers_are_rejected() {
    assert_eq!(
        Subject::model("  "),
        Err(SubjectError::EmptyIdentifier {
            role: SubjectRole::Subject
        })
    );
    assert_eq!(
        Subject::controller("Posts", ":"),
        Err(SubjectError::EmptyIdentifier {
            role: SubjectRole::Topic
        })
    );
    assert!(matches!(
        Subject::model_attribute("Widget", "title.short"),
        Err(SubjectError::InvalidIdentifier {
            role: SubjectRole::Member,
            ..
        })
    ));
}

#[test]
fn every_shape_enforces_its_roles() {
    for shape in SubjectShape::ALL {
        let ids = translation_coverage_core::SubjectIdentifiers::new("Widget")
            .with_member("title")
            .with_topic("taken");
        let result = Subject::new(shape, &ids);
        let fully_populated = shape.uses_member() && shape.uses_topic();
        assert_eq!(result.is_ok(), fully_populated, "unexpected outcome for {shape}");
    }
}

#[test]
fn shapes_serialize_in_snake_case() {
    let text = serde_json::to_string(&SubjectShape::ControllerAction).unwrap();
    assert_eq!(text, "\"controller_action\"");
    let shape: SubjectShape = serde_json::from_str("\"error_attribute\"").unwrap();
    assert_eq!(shape, SubjectShape::ErrorAttribute);
}

#[test]
fn locale_sets_reject_empty_and_duplicates() {
    assert_eq!(LocaleSet::new(Vec::new()), Err(LocaleError::Empty));
    assert_eq!(
        LocaleSet::new(vec![LocaleId::new("en"), LocaleId::new("fr"), LocaleId::new("en")]),
        Err(LocaleError::Duplicate(LocaleId::new("en")))
    );
    assert_eq!(
        LocaleSet::new(vec![LocaleId::new("e n")]),
        Err(LocaleError::Invalid("e n".to_string()))
    );
}

#[test]
fn locale_config_resolves_selections() {
    let config = LocaleConfig::new(LocaleId::new("fr"), locales(&["en", "fr", "jp"])).unwrap();
    assert_eq!(config.resolve(LocaleSelection::DefaultOnly), locales(&["fr"]));
    assert_eq!(config.resolve(LocaleSelection::AllAvailable), locales(&["en", "fr", "jp"]));
    assert_eq!(LocaleSelection::default(), LocaleSelection::AllAvailable);
}

#[test]
fn default_locale_must_be_available() {
    assert_eq!(
        LocaleConfig::new(LocaleId::new("de"), locales(&["en", "fr"])),
        Err(LocaleError::DefaultNotAvailable(LocaleId::new("de")))
    );
}
