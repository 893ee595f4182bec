// crates/translation-coverage-core/src/core/keys.rs
// ============================================================================
// Module: Translation Coverage Key Patterns
// Description: Table-driven candidate key generation per subject shape.
// Purpose: Produce ordered fallback keys from most specific to most generic.
// Dependencies: crate::core::{identifiers, subject}, serde, thiserror
// ============================================================================

//! ## Overview
//! Each [`SubjectShape`] owns one fixed, ordered template list. A template is
//! a sequence of segments (namespace, literal, or subject role) joined with
//! `.`. Generation is pure and deterministic: identical inputs always yield
//! the identical ordered [`CandidateKeys`].
//!
//! ## Invariants
//! - Every shape has at least one template; generated lists are never empty.
//! - Template order is a fixed contract: reports and tests assert on it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::TranslationKey;
use crate::core::subject::Subject;
use crate::core::subject::SubjectError;
use crate::core::subject::SubjectIdentifiers;
use crate::core::subject::SubjectRole;
use crate::core::subject::SubjectShape;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default namespace for model keys.
pub const DEFAULT_MODEL_NAMESPACE: &str = "activerecord";

/// Default namespace for controller keys.
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = "actioncontroller";

// ============================================================================
// SECTION: Namespaces
// ============================================================================

/// Namespace validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// The namespace is empty.
    #[error("{field} namespace must not be empty")]
    Empty {
        /// Namespace field name.
        field: &'static str,
    },
    /// The namespace cannot prefix a dotted key.
    #[error("{field} namespace '{value}' is malformed: {reason}")]
    Malformed {
        /// Namespace field name.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Rejection reason.
        reason: &'static str,
    },
}

/// Leading key segments for model and controller families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyNamespaces {
    /// Model namespace (`activerecord` by default).
    model: String,
    /// Controller namespace (`actioncontroller` by default).
    controller: String,
}

impl KeyNamespaces {
    /// Creates validated namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`NamespaceError`] when either namespace is empty or malformed.
    pub fn new(
        model: impl Into<String>,
        controller: impl Into<String>,
    ) -> Result<Self, NamespaceError> {
        let model = model.into();
        let controller = controller.into();
        validate_namespace("model", &model)?;
        validate_namespace("controller", &controller)?;
        Ok(Self {
            model,
            controller,
        })
    }

    /// Returns the model namespace.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the controller namespace.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }
}

impl Default for KeyNamespaces {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_NAMESPACE.to_string(),
            controller: DEFAULT_CONTROLLER_NAMESPACE.to_string(),
        }
    }
}

/// Validates a namespace prefix.
///
/// # Errors
///
/// Returns [`NamespaceError`] when the value is empty, padded with
/// whitespace, or has leading, trailing, or doubled dots.
pub fn validate_namespace(field: &'static str, value: &str) -> Result<(), NamespaceError> {
    if value.is_empty() {
        return Err(NamespaceError::Empty {
            field,
        });
    }
    let malformed = |reason| NamespaceError::Malformed {
        field,
        value: value.to_string(),
        reason,
    };
    if value.chars().any(char::is_whitespace) {
        return Err(malformed("whitespace is not allowed"));
    }
    if value.split('.').any(str::is_empty) {
        return Err(malformed("empty key segment"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Templates
// ============================================================================

/// One segment of a key template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// Configured model namespace.
    ModelNamespace,
    /// Configured controller namespace.
    ControllerNamespace,
    /// Fixed literal segment.
    Literal(&'static str),
    /// Normalized identifier for a subject role.
    Role(SubjectRole),
}

/// Ordered segments forming one candidate key.
type Template = &'static [Segment];

use Segment::ControllerNamespace as Ctl;
use Segment::Literal as Lit;
use Segment::ModelNamespace as Mdl;

/// Class or controller segment.
const SUBJECT: Segment = Segment::Role(SubjectRole::Subject);
/// Attribute or action segment.
const MEMBER: Segment = Segment::Role(SubjectRole::Member);
/// Message or error segment.
const TOPIC: Segment = Segment::Role(SubjectRole::Topic);

/// `model-namespace.models.{subject}`.
const MODEL_TEMPLATES: &[Template] = &[&[Mdl, Lit("models"), SUBJECT]];

/// `model-namespace.attributes.{subject}.{member}`.
const MODEL_ATTRIBUTE_TEMPLATES: &[Template] = &[&[Mdl, Lit("attributes"), SUBJECT, MEMBER]];

/// Controller flash keys without an action.
const CONTROLLER_TEMPLATES: &[Template] =
    &[&[Ctl, SUBJECT, Lit("flash"), TOPIC], &[Ctl, Lit("flash"), TOPIC]];

/// Controller flash keys scoped by action.
const CONTROLLER_ACTION_TEMPLATES: &[Template] = &[
    &[Ctl, SUBJECT, MEMBER, Lit("flash"), TOPIC],
    &[Ctl, SUBJECT, Lit("flash"), TOPIC],
    &[Ctl, MEMBER, Lit("flash"), TOPIC],
    &[Ctl, Lit("flash"), TOPIC],
];

/// Model error keys without an attribute.
const ERROR_TEMPLATES: &[Template] = &[
    &[Mdl, Lit("errors"), Lit("models"), SUBJECT, TOPIC],
    &[Mdl, Lit("errors"), Lit("messages"), TOPIC],
    &[Lit("errors"), Lit("messages"), TOPIC],
];

/// Model error keys scoped by attribute.
const ERROR_ATTRIBUTE_TEMPLATES: &[Template] = &[
    &[Mdl, Lit("errors"), Lit("models"), SUBJECT, Lit("attributes"), MEMBER, TOPIC],
    &[Mdl, Lit("errors"), Lit("models"), SUBJECT, TOPIC],
    &[Mdl, Lit("errors"), Lit("messages"), TOPIC],
    &[Lit("errors"), Lit("attributes"), MEMBER, TOPIC],
    &[Lit("errors"), Lit("messages"), TOPIC],
];

/// Returns the ordered template family for a shape.
const fn templates_for(shape: SubjectShape) -> &'static [Template] {
    match shape {
        SubjectShape::Model => MODEL_TEMPLATES,
        SubjectShape::ModelAttribute => MODEL_ATTRIBUTE_TEMPLATES,
        SubjectShape::Controller => CONTROLLER_TEMPLATES,
        SubjectShape::ControllerAction => CONTROLLER_ACTION_TEMPLATES,
        SubjectShape::Error => ERROR_TEMPLATES,
        SubjectShape::ErrorAttribute => ERROR_ATTRIBUTE_TEMPLATES,
    }
}

// ============================================================================
// SECTION: Candidate Keys
// ============================================================================

/// Ordered candidate keys generated for one subject, most specific first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateKeys {
    /// Subject the keys were generated for.
    subject: Subject,
    /// Candidate keys, most specific first.
    keys: Vec<TranslationKey>,
}

impl CandidateKeys {
    /// Returns the subject the keys were generated for.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the keys in fallback order.
    #[must_use]
    pub fn keys(&self) -> &[TranslationKey] {
        &self.keys
    }

    /// Iterates over the keys in fallback order.
    pub fn iter(&self) -> impl Iterator<Item = &TranslationKey> {
        self.keys.iter()
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for generated candidates; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the most specific key.
    #[must_use]
    pub fn most_specific(&self) -> Option<&TranslationKey> {
        self.keys.first()
    }

    /// Returns the most generic key.
    #[must_use]
    pub fn most_generic(&self) -> Option<&TranslationKey> {
        self.keys.last()
    }
}

// ============================================================================
// SECTION: Key Generator
// ============================================================================

/// Generates candidate keys using configured namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyGenerator {
    /// Namespaces substituted into templates.
    namespaces: KeyNamespaces,
}

impl KeyGenerator {
    /// Creates a generator with the given namespaces.
    #[must_use]
    pub const fn new(namespaces: KeyNamespaces) -> Self {
        Self {
            namespaces,
        }
    }

    /// Returns the configured namespaces.
    #[must_use]
    pub const fn namespaces(&self) -> &KeyNamespaces {
        &self.namespaces
    }

    /// Validates raw identifiers for `shape` and generates its candidate keys.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when the identifiers do not satisfy the shape.
    pub fn generate(
        &self,
        shape: SubjectShape,
        identifiers: &SubjectIdentifiers,
    ) -> Result<CandidateKeys, SubjectError> {
        let subject = Subject::new(shape, identifiers)?;
        self.generate_for(subject)
    }

    /// Generates candidate keys for an already validated subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::MissingRole`] if a template references a role
    /// the subject does not carry.
    pub fn generate_for(&self, subject: Subject) -> Result<CandidateKeys, SubjectError> {
        let keys = templates_for(subject.shape())
            .iter()
            .map(|template| self.render(template, &subject))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CandidateKeys {
            subject,
            keys,
        })
    }

    /// Renders one template into a dotted key.
    fn render(
        &self,
        template: Template,
        subject: &Subject,
    ) -> Result<TranslationKey, SubjectError> {
        let mut parts: Vec<&str> = Vec::with_capacity(template.len());
        for segment in template {
            let part = match *segment {
                Segment::ModelNamespace => self.namespaces.model(),
                Segment::ControllerNamespace => self.namespaces.controller(),
                Segment::Literal(literal) => literal,
                Segment::Role(role) => {
                    subject.role_key(role).ok_or(SubjectError::MissingRole {
                        shape: subject.shape(),
                        role,
                    })?
                }
            };
            parts.push(part);
        }
        Ok(TranslationKey::new(parts.join(".")))
    }
}
