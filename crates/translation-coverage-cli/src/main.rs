// crates/translation-coverage-cli/src/main.rs
// ============================================================================
// Module: Translation Coverage CLI Entry Point
// Description: Command dispatcher for coverage checks and key inspection.
// Purpose: Provide a localized CLI over the coverage engine and file catalog.
// Dependencies: clap, translation-coverage-{core,config,providers}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `translation-coverage` loads a configuration file, the locale files it
//! points at, and a subjects manifest, then reports which subjects lack a
//! translation in the tested locales. The process exits non-zero when any
//! subject fails or any input is invalid. All user-facing strings are routed
//! through the i18n catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;
use translation_coverage_cli::audit::AuditSink;
use translation_coverage_cli::audit::CoverageAuditEvent;
use translation_coverage_cli::audit::FileAuditSink;
use translation_coverage_cli::audit::LookupCounter;
use translation_coverage_cli::audit::NoopAuditSink;
use translation_coverage_cli::audit::StderrAuditSink;
use translation_coverage_cli::i18n::Locale;
use translation_coverage_cli::i18n::set_locale;
use translation_coverage_cli::manifest::SubjectsManifest;
use translation_coverage_cli::t;
use translation_coverage_config::CoverageConfig;
use translation_coverage_core::KeyGenerator;
use translation_coverage_core::KeyNamespaces;
use translation_coverage_core::LocaleSelection;
use translation_coverage_core::SubjectIdentifiers;
use translation_coverage_core::SubjectShape;
use translation_coverage_core::Verdict;
use translation_coverage_providers::CatalogConfig;
use translation_coverage_providers::FileCatalog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "TRANSLATION_COVERAGE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "translation-coverage", version, disable_help_subcommand = true)]
struct Cli {
    /// Preferred output language (overrides `TRANSLATION_COVERAGE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check translation coverage for every subject in a manifest.
    Check(CheckCommand),
    /// Print the candidate keys for one subject, most specific first.
    Keys(KeysCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the coverage check command.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Subjects manifest (TOML).
    #[arg(long, value_name = "PATH")]
    subjects: PathBuf,
    /// Optional config file path (defaults to translation-coverage.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Test only the default locale unless an entry overrides it.
    #[arg(long)]
    default_locale_only: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for the key listing command.
#[derive(Args, Debug)]
struct KeysCommand {
    /// Subject shape.
    #[arg(long, value_enum)]
    shape: ShapeArg,
    /// Class or controller name.
    #[arg(long, value_name = "NAME")]
    subject: String,
    /// Attribute or action name.
    #[arg(long, value_name = "NAME")]
    member: Option<String>,
    /// Message or error name.
    #[arg(long, value_name = "NAME")]
    topic: Option<String>,
    /// Config file supplying key namespaces (defaults are used when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to translation-coverage.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

/// Check report formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One line per subject plus failure details.
    Text,
    /// JSON array of verdicts.
    Json,
}

/// Subject shapes accepted on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
#[value(rename_all = "snake_case")]
enum ShapeArg {
    /// Model name.
    Model,
    /// Model attribute name.
    ModelAttribute,
    /// Controller flash message.
    Controller,
    /// Controller action flash message.
    ControllerAction,
    /// Model error message.
    Error,
    /// Attribute error message.
    ErrorAttribute,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Runs the CLI and maps failures to a non-zero exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    match cli.command {
        Commands::Check(command) => command_check(&command),
        Commands::Keys(command) => command_keys(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

/// Executes the coverage check command.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let locale_config =
        config.locale_config().map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let namespaces = config
        .key_namespaces()
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let generator = KeyGenerator::new(namespaces);
    let catalog = FileCatalog::load(&CatalogConfig {
        paths: config.catalog_paths(),
        max_bytes: config.catalog.max_bytes,
        allow_yaml: config.catalog.allow_yaml,
    })
    .map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))?;
    let manifest = SubjectsManifest::load(&command.subjects).map_err(|err| {
        CliError::new(t!(
            "manifest.load_failed",
            path = command.subjects.display(),
            error = err
        ))
    })?;
    let sink = audit_sink(&config)?;

    let default_selection = if command.default_locale_only {
        LocaleSelection::DefaultOnly
    } else {
        LocaleSelection::AllAvailable
    };

    let mut verdicts: Vec<Verdict> = Vec::with_capacity(manifest.subjects.len());
    for (index, entry) in manifest.subjects.iter().enumerate() {
        let request = entry.request(default_selection);
        let mut counter = LookupCounter::default();
        let verdict = request
            .evaluate_with_trace(&generator, &locale_config, &catalog, &mut counter)
            .map_err(|err| {
                CliError::new(t!(
                    "check.subject_failed",
                    index = index + 1,
                    shape = entry.shape,
                    subject = entry.subject,
                    error = err
                ))
            })?;
        sink.record(&CoverageAuditEvent::from_verdict(&verdict, &counter));
        verdicts.push(verdict);
    }

    match command.format {
        OutputFormat::Text => write_text_report(&verdicts)?,
        OutputFormat::Json => write_json_report(&verdicts)?,
    }

    if verdicts.iter().all(Verdict::passed) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Writes one line per verdict, failure details, and a summary.
fn write_text_report(verdicts: &[Verdict]) -> CliResult<()> {
    for verdict in verdicts {
        let label = verdict.subject().label();
        let description = verdict.description();
        let line = if verdict.passed() {
            t!("check.result.pass", label = label, description = description)
        } else {
            t!("check.result.fail", label = label, description = description)
        };
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        if !verdict.passed() {
            for detail in verdict.failure_detail().lines() {
                write_stdout_line(&format!("    {detail}"))
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
    }
    let covered = verdicts.iter().filter(|verdict| verdict.passed()).count();
    let summary = t!(
        "check.summary",
        covered = covered,
        total = verdicts.len(),
        failing = verdicts.len() - covered
    );
    write_stdout_line(&summary).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes the verdicts as a pretty-printed JSON array.
fn write_json_report(verdicts: &[Verdict]) -> CliResult<()> {
    let payload = serde_json::to_string_pretty(verdicts)
        .map_err(|err| CliError::new(t!("check.serialize_failed", error = err)))?;
    write_stdout_line(&payload).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Builds the audit sink described by the `[audit]` section.
fn audit_sink(config: &CoverageConfig) -> CliResult<Box<dyn AuditSink>> {
    if !config.audit.enabled {
        return Ok(Box::new(NoopAuditSink));
    }
    match config.audit_path() {
        Some(path) => {
            let sink = FileAuditSink::new(&path).map_err(|err| {
                CliError::new(t!("audit.open_failed", path = path.display(), error = err))
            })?;
            Ok(Box::new(sink))
        }
        None => Ok(Box::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Keys Command
// ============================================================================

/// Prints the candidate keys for one subject.
fn command_keys(command: &KeysCommand) -> CliResult<ExitCode> {
    let namespaces = match command.config.as_deref() {
        Some(path) => load_config(Some(path))?
            .key_namespaces()
            .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?,
        None => KeyNamespaces::default(),
    };
    let identifiers = SubjectIdentifiers {
        subject: command.subject.clone(),
        member: command.member.clone(),
        topic: command.topic.clone(),
    };
    let candidates = KeyGenerator::new(namespaces)
        .generate(command.shape.into(), &identifiers)
        .map_err(|err| CliError::new(t!("keys.generate_failed", error = err)))?;
    for key in candidates.iter() {
        write_stdout_line(key.as_str())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads and validates the config file.
fn load_config(path: Option<&std::path::Path>) -> CliResult<CoverageConfig> {
    CoverageConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Converts CLI language selections into catalog locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Converts CLI shape selections into subject shapes.
impl From<ShapeArg> for SubjectShape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Model => Self::Model,
            ShapeArg::ModelAttribute => Self::ModelAttribute,
            ShapeArg::Controller => Self::Controller,
            ShapeArg::ControllerAction => Self::ControllerAction,
            ShapeArg::Error => Self::Error,
            ShapeArg::ErrorAttribute => Self::ErrorAttribute,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
