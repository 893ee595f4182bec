// crates/translation-coverage-cli/src/manifest.rs
// ============================================================================
// Module: Subjects Manifest
// Description: TOML list of subjects to check in one CLI run.
// Purpose: Parse and bound the subjects file into coverage requests.
// Dependencies: translation-coverage-core, serde, toml, thiserror
// ============================================================================

//! ## Overview
//! A subjects manifest lists `[[subjects]]` tables, each naming a shape and
//! its raw identifiers. An entry may pin its own locale selection; otherwise
//! the selection chosen on the command line applies.
//!
//! ```toml
//! [[subjects]]
//! shape = "error_attribute"
//! subject = "Widget"
//! member = "title"
//! topic = "taken"
//! locales = "default_only"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use translation_coverage_core::CoverageRequest;
use translation_coverage_core::LocaleSelection;
use translation_coverage_core::SubjectIdentifiers;
use translation_coverage_core::SubjectShape;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum subjects manifest size in bytes.
pub const MAX_MANIFEST_BYTES: usize = 1024 * 1024;

/// Maximum number of subjects per manifest.
pub const MAX_SUBJECTS: usize = 10_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Subjects manifest errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be read.
    #[error("subjects manifest io error: {0}")]
    Io(String),
    /// The manifest exceeds the size limit.
    #[error("subjects manifest exceeds {limit} bytes")]
    TooLarge {
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// The manifest is not valid UTF-8 TOML.
    #[error("subjects manifest parse error: {0}")]
    Parse(String),
    /// The manifest has no subjects.
    #[error("subjects manifest lists no subjects")]
    Empty,
    /// The manifest has too many subjects.
    #[error("subjects manifest lists more than {limit} subjects")]
    TooManySubjects {
        /// Allowed subject count.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Manifest Types
// ============================================================================

/// Parsed subjects manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectsManifest {
    /// Subjects in file order.
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

/// One subject to check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectEntry {
    /// Subject shape.
    pub shape: SubjectShape,
    /// Class or controller name.
    pub subject: String,
    /// Attribute or action name.
    #[serde(default)]
    pub member: Option<String>,
    /// Message or error name.
    #[serde(default)]
    pub topic: Option<String>,
    /// Locale selection override for this entry.
    #[serde(default)]
    pub locales: Option<LocaleSelection>,
}

impl SubjectEntry {
    /// Builds the coverage request, falling back to `default_selection`.
    #[must_use]
    pub fn request(&self, default_selection: LocaleSelection) -> CoverageRequest {
        let identifiers = SubjectIdentifiers {
            subject: self.subject.clone(),
            member: self.member.clone(),
            topic: self.topic.clone(),
        };
        CoverageRequest::new(self.shape, identifiers)
            .with_selection(self.locales.unwrap_or(default_selection))
    }
}

impl SubjectsManifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when the file is unreadable, oversized, or invalid.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let bytes = read_bytes_with_limit(path, MAX_MANIFEST_BYTES)?;
        let content =
            std::str::from_utf8(&bytes).map_err(|err| ManifestError::Parse(err.to_string()))?;
        Self::parse(content)
    }

    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when the text is invalid or lists no subjects.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            toml::from_str(content).map_err(|err| ManifestError::Parse(err.to_string()))?;
        if manifest.subjects.is_empty() {
            return Err(ManifestError::Empty);
        }
        if manifest.subjects.len() > MAX_SUBJECTS {
            return Err(ManifestError::TooManySubjects {
                limit: MAX_SUBJECTS,
            });
        }
        Ok(manifest)
    }
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ManifestError> {
    let file = File::open(path).map_err(|err| ManifestError::Io(err.to_string()))?;
    let read_limit = u64::try_from(max_bytes).map_or(u64::MAX, |limit| limit.saturating_add(1));
    let mut bytes = Vec::new();
    file.take(read_limit)
        .read_to_end(&mut bytes)
        .map_err(|err| ManifestError::Io(err.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(ManifestError::TooLarge {
            limit: max_bytes,
        });
    }
    Ok(bytes)
}
