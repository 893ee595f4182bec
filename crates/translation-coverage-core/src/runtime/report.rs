// crates/translation-coverage-core/src/runtime/report.rs
// ============================================================================
// Module: Translation Coverage Reports
// Description: Human-readable descriptions and failure details for verdicts.
// Purpose: Render stable report text as pure functions of a verdict.
// Dependencies: crate::core, crate::runtime::verdict
// ============================================================================

//! ## Overview
//! Report text is part of the public contract: test adapters and the CLI
//! print it verbatim. Locales render in symbol form (`:en, :fr`), subjects
//! as `Model` or `Model#member`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use crate::core::identifiers::LocaleId;
use crate::core::subject::Identifier;
use crate::core::subject::Subject;
use crate::core::subject::SubjectShape;
use crate::runtime::verdict::Verdict;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Renders locales as `:en, :fr, :jp`.
#[must_use]
pub fn format_locales<'a>(locales: impl IntoIterator<Item = &'a LocaleId>) -> String {
    locales.into_iter().map(|locale| format!(":{locale}")).collect::<Vec<_>>().join(", ")
}

/// Returns the shape-specific expectation phrase, e.g. `attribute name for 'title'`.
#[must_use]
pub fn expectation_phrase(subject: &Subject) -> String {
    let member = subject.member().map(Identifier::display);
    let topic = subject.topic().map(Identifier::display).unwrap_or_default();
    match (subject.shape(), member) {
        (SubjectShape::Model, _) => "model name".to_string(),
        (SubjectShape::ModelAttribute, member) => {
            format!("attribute name for '{}'", member.unwrap_or_default())
        }
        (SubjectShape::Controller | SubjectShape::ControllerAction, None) => {
            format!("flash message for '{topic}'")
        }
        (SubjectShape::Controller | SubjectShape::ControllerAction, Some(action)) => {
            format!("flash message for '{topic}' on '{action}'")
        }
        (SubjectShape::Error | SubjectShape::ErrorAttribute, None) => {
            format!("error message for '{topic}'")
        }
        (SubjectShape::Error | SubjectShape::ErrorAttribute, Some(attribute)) => {
            format!("error message for '{topic}' on '{attribute}'")
        }
    }
}

/// Returns `have a translated {phrase} in {locales}`.
#[must_use]
pub fn describe(verdict: &Verdict) -> String {
    format!(
        "have a translated {} in {}",
        expectation_phrase(verdict.subject()),
        format_locales(verdict.tested_locales())
    )
}

/// Returns the multi-line failure detail listing every candidate key tried.
///
/// On a passing verdict the trailing locale line is empty.
#[must_use]
pub fn failure_detail(verdict: &Verdict) -> String {
    let subject = verdict.subject();
    let mut message = format!(
        "expected '{}' to have a translated {}\nbut none of the following keys was found:\n",
        subject.label(),
        expectation_phrase(subject)
    );
    for key in verdict.candidates().iter() {
        let _ = writeln!(message, "  - {key}");
    }
    let _ = write!(message, "for the locales: {}", format_locales(verdict.failing_locales()));
    message
}
