// crates/translation-coverage-cli/src/audit.rs
// ============================================================================
// Module: Coverage Audit Logging
// Description: Structured audit events for coverage checks run by the CLI.
// Purpose: Emit one JSON line per checked subject without a logging framework.
// Dependencies: translation-coverage-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Every subject checked by `translation-coverage check` produces a
//! [`CoverageAuditEvent`]. Sinks serialize events as JSON lines so they can
//! be routed to any log pipeline. The checker itself never logs; lookup
//! counts come from a [`LookupCounter`] trace hook.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use translation_coverage_core::CoverageTrace;
use translation_coverage_core::LocaleId;
use translation_coverage_core::SubjectShape;
use translation_coverage_core::TranslationKey;
use translation_coverage_core::Verdict;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Audit payload for a single coverage check.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageAuditEvent {
    /// Event name.
    pub event: &'static str,
    /// Milliseconds since the unix epoch.
    pub timestamp_ms: u128,
    /// Subject shape.
    pub shape: SubjectShape,
    /// Subject label, e.g. `Widget#title`.
    pub subject: String,
    /// Whether every tested locale was covered.
    pub passed: bool,
    /// Locales tested, in order.
    pub tested_locales: Vec<String>,
    /// Locales without a resolving candidate.
    pub failing_locales: Vec<String>,
    /// Number of candidate keys generated.
    pub candidate_count: usize,
    /// Number of lookups performed.
    pub lookup_count: usize,
    /// Number of lookups that found a key (one per covered locale).
    pub hit_count: usize,
}

impl CoverageAuditEvent {
    /// Builds an audit event from a verdict and the lookups that produced it.
    #[must_use]
    pub fn from_verdict(verdict: &Verdict, lookups: &LookupCounter) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "coverage_check",
            timestamp_ms,
            shape: verdict.subject().shape(),
            subject: verdict.subject().label(),
            passed: verdict.passed(),
            tested_locales: verdict
                .tested_locales()
                .iter()
                .map(|locale| locale.as_str().to_string())
                .collect(),
            failing_locales: verdict
                .failing_locales()
                .iter()
                .map(|locale| locale.as_str().to_string())
                .collect(),
            candidate_count: verdict.candidates().len(),
            lookup_count: lookups.lookups,
            hit_count: lookups.hits,
        }
    }
}

// ============================================================================
// SECTION: Lookup Counter
// ============================================================================

/// Trace hook that counts lookups and hits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupCounter {
    /// Lookups performed.
    pub lookups: usize,
    /// Lookups that found a key.
    pub hits: usize,
}

impl CoverageTrace for LookupCounter {
    fn on_lookup(&mut self, _locale: &LocaleId, _key: &TranslationKey, found: bool) {
        self.lookups += 1;
        if found {
            self.hits += 1;
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for coverage events.
pub trait AuditSink: Send + Sync {
    /// Record a coverage audit event.
    fn record(&self, event: &CoverageAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &CoverageAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &CoverageAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Audit sink that drops events.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &CoverageAuditEvent) {}
}
