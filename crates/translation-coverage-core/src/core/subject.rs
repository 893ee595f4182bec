// crates/translation-coverage-core/src/core/subject.rs
// ============================================================================
// Module: Translation Coverage Subjects
// Description: Subject shapes, raw identifiers, and validated subjects.
// Purpose: Validate subject roles once so key generation never degrades shapes.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A subject is what a coverage check is about: a model, one of its
//! attributes, a controller flash message, or a validation error. The
//! [`SubjectShape`] selects the key family; [`SubjectIdentifiers`] carry the
//! raw names supplied by the caller; [`Subject`] is the validated,
//! normalized combination of both.
//!
//! ## Invariants
//! - Every role required by the shape is present and non-empty.
//! - Roles the shape does not use are rejected rather than ignored.
//! - Identifier keys never contain `.`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::display_form;
use crate::core::identifiers::normalize_identifier;

// ============================================================================
// SECTION: Subject Shape
// ============================================================================

/// Closed set of subject shapes, each owning one key template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectShape {
    /// Model name (`subject` only).
    Model,
    /// Model attribute name (`subject` + `member`).
    ModelAttribute,
    /// Controller flash message (`subject` + `topic`).
    Controller,
    /// Controller action flash message (`subject` + `member` + `topic`).
    ControllerAction,
    /// Model validation error (`subject` + `topic`).
    Error,
    /// Attribute validation error (`subject` + `member` + `topic`).
    ErrorAttribute,
}

impl SubjectShape {
    /// All shapes in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Model,
        Self::ModelAttribute,
        Self::Controller,
        Self::ControllerAction,
        Self::Error,
        Self::ErrorAttribute,
    ];

    /// Returns the canonical snake case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::ModelAttribute => "model_attribute",
            Self::Controller => "controller",
            Self::ControllerAction => "controller_action",
            Self::Error => "error",
            Self::ErrorAttribute => "error_attribute",
        }
    }

    /// Returns whether the shape takes a `member` identifier.
    #[must_use]
    pub const fn uses_member(self) -> bool {
        matches!(self, Self::ModelAttribute | Self::ControllerAction | Self::ErrorAttribute)
    }

    /// Returns whether the shape takes a `topic` identifier.
    #[must_use]
    pub const fn uses_topic(self) -> bool {
        !matches!(self, Self::Model | Self::ModelAttribute)
    }
}

impl fmt::Display for SubjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier roles within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRole {
    /// Class or controller name.
    Subject,
    /// Attribute or action name.
    Member,
    /// Message or error name.
    Topic,
}

impl SubjectRole {
    /// Returns the canonical role label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Member => "member",
            Self::Topic => "topic",
        }
    }
}

impl fmt::Display for SubjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Subject validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// A role required by the shape was not supplied.
    #[error("{shape} subject requires a {role} identifier")]
    MissingRole {
        /// Shape being validated.
        shape: SubjectShape,
        /// Missing role.
        role: SubjectRole,
    },
    /// A role the shape does not use was supplied.
    #[error("{shape} subject does not accept a {role} identifier")]
    UnexpectedRole {
        /// Shape being validated.
        shape: SubjectShape,
        /// Unexpected role.
        role: SubjectRole,
    },
    /// The identifier is empty after normalization.
    #[error("{role} identifier is empty")]
    EmptyIdentifier {
        /// Role of the empty identifier.
        role: SubjectRole,
    },
    /// The identifier cannot be spliced into a dotted key.
    #[error("{role} identifier '{value}' is invalid: {reason}")]
    InvalidIdentifier {
        /// Role of the rejected identifier.
        role: SubjectRole,
        /// Raw identifier value.
        value: String,
        /// Rejection reason.
        reason: &'static str,
    },
}

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Raw, caller-supplied subject identifiers prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectIdentifiers {
    /// Class or controller name.
    pub subject: String,
    /// Optional attribute or action name.
    #[serde(default)]
    pub member: Option<String>,
    /// Optional message or error name.
    #[serde(default)]
    pub topic: Option<String>,
}

impl SubjectIdentifiers {
    /// Creates identifiers with only the subject role set.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            member: None,
            topic: None,
        }
    }

    /// Returns a copy with the member role set.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Returns a copy with the topic role set.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

/// A validated identifier with its display text and normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    /// Trimmed input text used in reports.
    display: String,
    /// Normalized snake case key used in candidate keys.
    key: String,
}

impl Identifier {
    /// Validates and normalizes a raw identifier for the given role.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when the identifier is empty or contains `.`.
    pub fn parse(role: SubjectRole, raw: &str) -> Result<Self, SubjectError> {
        let display = display_form(raw);
        let key = normalize_identifier(raw);
        if key.is_empty() || key.chars().all(|ch| ch == '_') {
            return Err(SubjectError::EmptyIdentifier {
                role,
            });
        }
        if key.contains('.') {
            return Err(SubjectError::InvalidIdentifier {
                role,
                value: raw.to_string(),
                reason: "identifiers must not contain '.'",
            });
        }
        Ok(Self {
            display: display.to_string(),
            key,
        })
    }

    /// Returns the display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the normalized key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

// ============================================================================
// SECTION: Subject
// ============================================================================

/// Validated subject: a shape plus normalized identifiers for its roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    /// Subject shape.
    shape: SubjectShape,
    /// Class or controller identifier.
    subject: Identifier,
    /// Attribute or action identifier, when the shape uses one.
    member: Option<Identifier>,
    /// Message or error identifier, when the shape uses one.
    topic: Option<Identifier>,
}

impl Subject {
    /// Validates raw identifiers against the role requirements of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when a required role is missing or empty, an
    /// unused role is supplied, or an identifier is malformed.
    pub fn new(
        shape: SubjectShape,
        identifiers: &SubjectIdentifiers,
    ) -> Result<Self, SubjectError> {
        let subject = Identifier::parse(SubjectRole::Subject, &identifiers.subject)?;
        let member = resolve_role(
            shape,
            SubjectRole::Member,
            shape.uses_member(),
            identifiers.member.as_deref(),
        )?;
        let topic = resolve_role(
            shape,
            SubjectRole::Topic,
            shape.uses_topic(),
            identifiers.topic.as_deref(),
        )?;
        Ok(Self {
            shape,
            subject,
            member,
            topic,
        })
    }

    /// Model name subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when the model name is invalid.
    pub fn model(model: &str) -> Result<Self, SubjectError> {
        Self::new(SubjectShape::Model, &SubjectIdentifiers::new(model))
    }

    /// Model attribute subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when an identifier is invalid.
    pub fn model_attribute(model: &str, attribute: &str) -> Result<Self, SubjectError> {
        Self::new(
            SubjectShape::ModelAttribute,
            &SubjectIdentifiers::new(model).with_member(attribute),
        )
    }

    /// Controller flash message subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when an identifier is invalid.
    pub fn controller(controller: &str, message: &str) -> Result<Self, SubjectError> {
        Self::new(
            SubjectShape::Controller,
            &SubjectIdentifiers::new(controller).with_topic(message),
        )
    }

    /// Controller action flash message subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when an identifier is invalid.
    pub fn controller_action(
        controller: &str,
        action: &str,
        message: &str,
    ) -> Result<Self, SubjectError> {
        Self::new(
            SubjectShape::ControllerAction,
            &SubjectIdentifiers::new(controller).with_member(action).with_topic(message),
        )
    }

    /// Model validation error subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when an identifier is invalid.
    pub fn error(model: &str, error: &str) -> Result<Self, SubjectError> {
        Self::new(SubjectShape::Error, &SubjectIdentifiers::new(model).with_topic(error))
    }

    /// Attribute validation error subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError`] when an identifier is invalid.
    pub fn error_attribute(
        model: &str,
        attribute: &str,
        error: &str,
    ) -> Result<Self, SubjectError> {
        Self::new(
            SubjectShape::ErrorAttribute,
            &SubjectIdentifiers::new(model).with_member(attribute).with_topic(error),
        )
    }

    /// Returns the subject shape.
    #[must_use]
    pub const fn shape(&self) -> SubjectShape {
        self.shape
    }

    /// Returns the class or controller identifier.
    #[must_use]
    pub const fn subject(&self) -> &Identifier {
        &self.subject
    }

    /// Returns the attribute or action identifier.
    #[must_use]
    pub const fn member(&self) -> Option<&Identifier> {
        self.member.as_ref()
    }

    /// Returns the message or error identifier.
    #[must_use]
    pub const fn topic(&self) -> Option<&Identifier> {
        self.topic.as_ref()
    }

    /// Returns the normalized key for a role, if the subject carries it.
    #[must_use]
    pub fn role_key(&self, role: SubjectRole) -> Option<&str> {
        match role {
            SubjectRole::Subject => Some(self.subject.key()),
            SubjectRole::Member => self.member.as_ref().map(Identifier::key),
            SubjectRole::Topic => self.topic.as_ref().map(Identifier::key),
        }
    }

    /// Returns the report label (`Widget` or `Widget#title`).
    #[must_use]
    pub fn label(&self) -> String {
        match &self.member {
            Some(member) => format!("{}#{}", self.subject.display(), member.display()),
            None => self.subject.display().to_string(),
        }
    }
}

/// Applies the required/forbidden rule for one optional role.
fn resolve_role(
    shape: SubjectShape,
    role: SubjectRole,
    required: bool,
    value: Option<&str>,
) -> Result<Option<Identifier>, SubjectError> {
    match (required, value) {
        (true, Some(raw)) => Identifier::parse(role, raw).map(Some),
        (true, None) => Err(SubjectError::MissingRole {
            shape,
            role,
        }),
        (false, Some(_)) => Err(SubjectError::UnexpectedRole {
            shape,
            role,
        }),
        (false, None) => Ok(None),
    }
}
