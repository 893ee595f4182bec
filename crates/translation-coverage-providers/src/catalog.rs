// crates/translation-coverage-providers/src/catalog.rs
// ============================================================================
// Module: File Translation Catalog
// Description: Translation lookup over Rails-style YAML and JSON locale files.
// Purpose: Load locale trees from disk into an immutable, queryable catalog.
// Dependencies: translation-coverage-core, serde, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! Each source document maps locale identifiers to nested mappings:
//!
//! ```yaml
//! en:
//!   activerecord:
//!     models:
//!       widget: Widget
//! ```
//!
//! Nested keys are joined with `.` and every non-null leaf (or empty
//! mapping) is recorded for its locale. Lookups then follow the in-memory
//! catalog rules, so interior nodes such as pluralized model names also
//! exist. Sources are read once at load time; file sizes are capped and
//! formats are chosen by extension.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use translation_coverage_core::InMemoryCatalog;
use translation_coverage_core::LocaleId;
use translation_coverage_core::LookupError;
use translation_coverage_core::TranslationKey;
use translation_coverage_core::TranslationLookup;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default maximum catalog file size in bytes.
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

/// Configuration for the file catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Files or directories to load, in order.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    /// Maximum file size allowed, in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
    /// Allow YAML parsing when the file extension is .yaml or .yml.
    #[serde(default = "default_allow_yaml")]
    pub allow_yaml: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            max_bytes: DEFAULT_MAX_BYTES,
            allow_yaml: true,
        }
    }
}

/// Default file size limit.
const fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

/// YAML is accepted unless disabled.
const fn default_allow_yaml() -> bool {
    true
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// File catalog loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source could not be read.
    #[error("unable to read catalog source {path}: {message}")]
    Io {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
    /// The file exceeds the configured size limit.
    #[error("catalog file {path} exceeds size limit of {max_bytes} bytes")]
    TooLarge {
        /// Source path.
        path: PathBuf,
        /// Configured limit.
        max_bytes: usize,
    },
    /// The file extension is not a supported catalog format.
    #[error("catalog file {path} has an unsupported format (expected .yml, .yaml, or .json)")]
    UnsupportedFormat {
        /// Source path.
        path: PathBuf,
    },
    /// YAML parsing is disabled by configuration.
    #[error("yaml parsing is disabled: {path}")]
    YamlDisabled {
        /// Source path.
        path: PathBuf,
    },
    /// The file is not valid YAML or JSON.
    #[error("invalid catalog document {path}: {message}")]
    Parse {
        /// Source path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// The document does not have the locale-tree layout.
    #[error("invalid catalog layout in {path}: {message}")]
    Layout {
        /// Source path.
        path: PathBuf,
        /// Layout violation.
        message: String,
    },
}

// ============================================================================
// SECTION: Formats
// ============================================================================

/// Supported catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    /// YAML document (`.yml`, `.yaml`).
    Yaml,
    /// JSON document (`.json`).
    Json,
}

impl DocumentFormat {
    /// Selects the format from a file extension.
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: File Catalog
// ============================================================================

/// Translation catalog loaded from locale files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCatalog {
    /// Flattened entries.
    entries: InMemoryCatalog,
    /// Files that contributed entries, in load order.
    files: Vec<PathBuf>,
}

impl FileCatalog {
    /// Loads every configured source.
    ///
    /// Directories are walked recursively in sorted order and files with
    /// unsupported extensions inside them are skipped. An explicitly listed
    /// file must have a supported extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a source is unreadable, oversized, or
    /// malformed.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for source in &config.paths {
            let metadata = fs::metadata(source).map_err(|err| CatalogError::Io {
                path: source.clone(),
                message: err.to_string(),
            })?;
            if metadata.is_dir() {
                for file in collect_directory(source)? {
                    catalog.load_file(&file, config)?;
                }
            } else {
                catalog.load_file(source, config)?;
            }
        }
        Ok(catalog)
    }

    /// Parses a single document from memory.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the document is malformed.
    pub fn from_document(
        name: &Path,
        content: &[u8],
        allow_yaml: bool,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        let document = parse_document(name, content, allow_yaml)?;
        flatten_document(name, &document, &mut catalog.entries)?;
        catalog.files.push(name.to_path_buf());
        Ok(catalog)
    }

    /// Returns the files that were loaded, in load order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the flattened entries.
    #[must_use]
    pub const fn entries(&self) -> &InMemoryCatalog {
        &self.entries
    }

    /// Reads, parses, and flattens one file.
    fn load_file(&mut self, path: &Path, config: &CatalogConfig) -> Result<(), CatalogError> {
        if DocumentFormat::from_path(path).is_none() {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        let content = read_file_limited(path, config.max_bytes)?;
        let document = parse_document(path, &content, config.allow_yaml)?;
        flatten_document(path, &document, &mut self.entries)?;
        self.files.push(path.to_path_buf());
        Ok(())
    }
}

impl TranslationLookup for FileCatalog {
    fn exists(&self, locale: &LocaleId, key: &TranslationKey) -> Result<bool, LookupError> {
        Ok(self.entries.contains(locale, key))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Collects supported files below `dir`, recursively and in sorted order.
///
/// Symlinked files are read; symlinked directories are skipped.
fn collect_directory(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let io_error = |err: std::io::Error| CatalogError::Io {
        path: dir.to_path_buf(),
        message: err.to_string(),
    };
    let mut children = fs::read_dir(dir)
        .map_err(io_error)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    children.sort();

    let mut files = Vec::new();
    for child in children {
        let file_type = fs::symlink_metadata(&child).map_err(io_error)?.file_type();
        // Symlinked directories may point back at an ancestor.
        if file_type.is_symlink() && child.is_dir() {
            continue;
        }
        if file_type.is_dir() {
            files.extend(collect_directory(&child)?);
        } else if DocumentFormat::from_path(&child).is_some() {
            files.push(child);
        }
    }
    Ok(files)
}

/// Reads a file while enforcing a maximum size.
fn read_file_limited(path: &Path, max_bytes: usize) -> Result<Vec<u8>, CatalogError> {
    let io_error = |err: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let file = File::open(path).map_err(io_error)?;
    let limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut buf = Vec::new();
    file.take(limit).read_to_end(&mut buf).map_err(io_error)?;
    if buf.len() > max_bytes {
        return Err(CatalogError::TooLarge {
            path: path.to_path_buf(),
            max_bytes,
        });
    }
    Ok(buf)
}

/// Parses a YAML or JSON document into a JSON value.
fn parse_document(path: &Path, content: &[u8], allow_yaml: bool) -> Result<Value, CatalogError> {
    let parse_error = |message: String| CatalogError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Yaml) => {
            if !allow_yaml {
                return Err(CatalogError::YamlDisabled {
                    path: path.to_path_buf(),
                });
            }
            let mut yaml: serde_yaml::Value =
                serde_yaml::from_slice(content).map_err(|err| parse_error(err.to_string()))?;
            yaml.apply_merge().map_err(|err| parse_error(err.to_string()))?;
            yaml_to_json(path, yaml)
        }
        Some(DocumentFormat::Json) => {
            serde_json::from_slice(content).map_err(|err| parse_error(err.to_string()))
        }
        None => Err(CatalogError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Converts a YAML value into JSON, stringifying scalar mapping keys.
fn yaml_to_json(path: &Path, value: serde_yaml::Value) -> Result<Value, CatalogError> {
    let layout_error = |message: String| CatalogError::Layout {
        path: path.to_path_buf(),
        message,
    };
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(flag) => Value::Bool(flag),
        serde_yaml::Value::Number(number) => Value::String(number.to_string()),
        serde_yaml::Value::String(text) => Value::String(text),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items.into_iter().map(|item| yaml_to_json(path, item)).collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, item) in mapping {
                let key = match key {
                    serde_yaml::Value::String(text) => text,
                    serde_yaml::Value::Bool(flag) => flag.to_string(),
                    serde_yaml::Value::Number(number) => number.to_string(),
                    _ => return Err(layout_error("mapping keys must be scalars".to_string())),
                };
                object.insert(key, yaml_to_json(path, item)?);
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(path, tagged.value)?,
    })
}

/// Records every non-null leaf of a locale document.
fn flatten_document(
    path: &Path,
    document: &Value,
    entries: &mut InMemoryCatalog,
) -> Result<(), CatalogError> {
    let layout_error = |message: String| CatalogError::Layout {
        path: path.to_path_buf(),
        message,
    };
    let locales = match document {
        Value::Null => return Ok(()),
        Value::Object(locales) => locales,
        _ => return Err(layout_error("document must map locales to translations".to_string())),
    };
    for (locale, tree) in locales {
        if locale.trim().is_empty() {
            return Err(layout_error("locale identifiers must be non-empty".to_string()));
        }
        match tree {
            Value::Null => {}
            Value::Object(children) => {
                let locale = LocaleId::new(locale.as_str());
                for (segment, child) in children {
                    flatten_node(&locale, segment.clone(), child, entries);
                }
            }
            _ => {
                return Err(layout_error(format!(
                    "locale '{locale}' must map to nested translations"
                )));
            }
        }
    }
    Ok(())
}

/// Records leaves below `node`, joining nested keys with `.`.
///
/// An empty mapping is recorded as its own key so it still exists.
fn flatten_node(locale: &LocaleId, key: String, node: &Value, entries: &mut InMemoryCatalog) {
    match node {
        Value::Null => {}
        Value::Object(children) if children.is_empty() => entries.insert(locale.clone(), key),
        Value::Object(children) => {
            for (segment, child) in children {
                flatten_node(locale, format!("{key}.{segment}"), child, entries);
            }
        }
        _ => entries.insert(locale.clone(), key),
    }
}
