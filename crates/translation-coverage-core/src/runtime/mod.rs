// crates/translation-coverage-core/src/runtime/mod.rs
// ============================================================================
// Module: Translation Coverage Runtime
// Description: Coverage checker, verdicts, reports, and in-memory catalog.
// Purpose: Evaluate candidate keys against a lookup service.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules run coverage checks and render their results. Every
//! entry point, from library callers to the CLI, goes through the same
//! [`check_with_trace`] loop.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod checker;
pub mod report;
pub mod verdict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::InMemoryCatalog;
pub use checker::CoverageError;
pub use checker::CoverageRequest;
pub use checker::CoverageTrace;
pub use checker::NoopTrace;
pub use checker::check;
pub use checker::check_with_trace;
pub use report::describe;
pub use report::expectation_phrase;
pub use report::failure_detail;
pub use report::format_locales;
pub use verdict::LocaleResolution;
pub use verdict::Verdict;
