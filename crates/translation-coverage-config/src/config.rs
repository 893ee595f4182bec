// crates/translation-coverage-config/src/config.rs
// ============================================================================
// Module: Translation Coverage Configuration
// Description: Configuration loading and validation for translation coverage.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: translation-coverage-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; defaults describe a single `en` locale, the
//! conventional key namespaces, no catalog sources, and auditing disabled.
//! Missing or invalid configuration fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use translation_coverage_core::DEFAULT_CONTROLLER_NAMESPACE;
use translation_coverage_core::DEFAULT_MODEL_NAMESPACE;
use translation_coverage_core::KeyNamespaces;
use translation_coverage_core::LocaleConfig;
use translation_coverage_core::LocaleId;
use translation_coverage_core::LocaleSet;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "translation-coverage.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TRANSLATION_COVERAGE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Default maximum catalog file size in bytes.
pub const DEFAULT_CATALOG_MAX_BYTES: usize = 1024 * 1024;
/// Upper bound for `catalog.max_bytes`.
pub const MAX_CATALOG_MAX_BYTES: usize = 16 * 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of catalog sources.
const MAX_CATALOG_PATHS: usize = 256;
/// Default locale when none is configured.
const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Root configuration for translation coverage checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    /// Default and available locales.
    #[serde(default)]
    pub locales: LocalesConfig,
    /// Leading key namespaces.
    #[serde(default)]
    pub namespaces: NamespacesConfig,
    /// Translation catalog sources.
    #[serde(default)]
    pub catalog: CatalogSourceConfig,
    /// Audit event output.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Directory of the loaded config file (not serialized).
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

/// Locale configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalesConfig {
    /// Default locale.
    #[serde(default = "default_locale")]
    pub default: String,
    /// Ordered available locales; empty means only the default.
    #[serde(default)]
    pub available: Vec<String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            available: Vec::new(),
        }
    }
}

impl LocalesConfig {
    /// Builds the validated locale configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when locales are blank, duplicated, or
    /// the default is not available.
    pub fn locale_config(&self) -> Result<LocaleConfig, ConfigError> {
        let default_locale = LocaleId::new(self.default.as_str());
        let available = if self.available.is_empty() {
            vec![default_locale.clone()]
        } else {
            self.available.iter().map(|locale| LocaleId::new(locale.as_str())).collect()
        };
        let set = LocaleSet::new(available)
            .map_err(|err| ConfigError::Invalid(format!("locales.available: {err}")))?;
        LocaleConfig::new(default_locale, set)
            .map_err(|err| ConfigError::Invalid(format!("locales.default: {err}")))
    }
}

/// Key namespace configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespacesConfig {
    /// Model key namespace.
    #[serde(default = "default_model_namespace")]
    pub model: String,
    /// Controller key namespace.
    #[serde(default = "default_controller_namespace")]
    pub controller: String,
}

impl Default for NamespacesConfig {
    fn default() -> Self {
        Self {
            model: default_model_namespace(),
            controller: default_controller_namespace(),
        }
    }
}

impl NamespacesConfig {
    /// Builds the validated key namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a namespace is malformed.
    pub fn key_namespaces(&self) -> Result<KeyNamespaces, ConfigError> {
        KeyNamespaces::new(self.model.as_str(), self.controller.as_str())
            .map_err(|err| ConfigError::Invalid(format!("namespaces: {err}")))
    }
}

/// Catalog source configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSourceConfig {
    /// Files or directories holding locale documents.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Maximum size of a single catalog file in bytes.
    #[serde(default = "default_catalog_max_bytes")]
    pub max_bytes: usize,
    /// Whether YAML documents are accepted.
    #[serde(default = "default_allow_yaml")]
    pub allow_yaml: bool,
}

impl Default for CatalogSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            max_bytes: default_catalog_max_bytes(),
            allow_yaml: default_allow_yaml(),
        }
    }
}

impl CatalogSourceConfig {
    /// Validates catalog source limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bytes == 0 || self.max_bytes > MAX_CATALOG_MAX_BYTES {
            return Err(ConfigError::Invalid(format!(
                "catalog.max_bytes must be between 1 and {MAX_CATALOG_MAX_BYTES}"
            )));
        }
        if self.paths.len() > MAX_CATALOG_PATHS {
            return Err(ConfigError::Invalid(format!(
                "catalog.paths exceeds {MAX_CATALOG_PATHS} entries"
            )));
        }
        for path in &self.paths {
            validate_path_string("catalog.paths", path)?;
        }
        Ok(())
    }
}

/// Audit output configuration section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Emit one JSON line per checked subject.
    #[serde(default)]
    pub enabled: bool,
    /// Append events to this file instead of stderr.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit output settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl CoverageConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml_str(content)?;
        config.source_dir = resolved.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locales.locale_config()?;
        self.namespaces.key_namespaces()?;
        self.catalog.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the validated locale configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the locale section is invalid.
    pub fn locale_config(&self) -> Result<LocaleConfig, ConfigError> {
        self.locales.locale_config()
    }

    /// Returns the validated key namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the namespace section is invalid.
    pub fn key_namespaces(&self) -> Result<KeyNamespaces, ConfigError> {
        self.namespaces.key_namespaces()
    }

    /// Returns catalog source paths, resolved against the config file directory.
    #[must_use]
    pub fn catalog_paths(&self) -> Vec<PathBuf> {
        self.catalog.paths.iter().map(|path| self.resolve_relative(path.trim())).collect()
    }

    /// Returns the audit file path, resolved against the config file directory.
    #[must_use]
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.audit.path.as_deref().map(|path| self.resolve_relative(path.trim()))
    }

    /// Joins a relative path onto the config file directory.
    fn resolve_relative(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        match &self.source_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.to_string_lossy().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Default locale identifier.
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Default model namespace.
fn default_model_namespace() -> String {
    DEFAULT_MODEL_NAMESPACE.to_string()
}

/// Default controller namespace.
fn default_controller_namespace() -> String {
    DEFAULT_CONTROLLER_NAMESPACE.to_string()
}

/// Default catalog file size limit.
const fn default_catalog_max_bytes() -> usize {
    DEFAULT_CATALOG_MAX_BYTES
}

/// YAML catalogs are accepted unless disabled.
const fn default_allow_yaml() -> bool {
    true
}
