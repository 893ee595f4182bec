// crates/translation-coverage-cli/src/tests/audit.rs
// ============================================================================
// Module: Coverage Audit Tests
// Description: Unit tests for audit events, sinks, and the lookup counter.
// Purpose: Ensure audit lines describe the verdict they were built from.
// Dependencies: translation-coverage-cli audit module, tempfile
// ============================================================================

//! ## Overview
//! Builds verdicts against an in-memory catalog and checks the JSON lines
//! written by the file sink.

use std::fs;

use serde_json::Value;
use translation_coverage_core::CoverageRequest;
use translation_coverage_core::InMemoryCatalog;
use translation_coverage_core::KeyGenerator;
use translation_coverage_core::LocaleConfig;
use translation_coverage_core::LocaleId;
use translation_coverage_core::LocaleSet;
use translation_coverage_core::SubjectIdentifiers;
use translation_coverage_core::SubjectShape;

use crate::audit::AuditSink;
use crate::audit::CoverageAuditEvent;
use crate::audit::FileAuditSink;
use crate::audit::LookupCounter;

fn locales() -> LocaleConfig {
    let set = LocaleSet::new(vec![LocaleId::new("en"), LocaleId::new("fr")]).unwrap();
    LocaleConfig::new(LocaleId::new("en"), set).unwrap()
}

fn attribute_request() -> CoverageRequest {
    CoverageRequest::new(
        SubjectShape::ModelAttribute,
        SubjectIdentifiers::new("Widget").with_member("title"),
    )
}

#[test]
fn counter_tracks_lookups_and_hits() {
    let catalog = InMemoryCatalog::new().with_entry("en", "activerecord.attributes.widget.title");
    let mut counter = LookupCounter::default();
    let verdict = attribute_request()
        .evaluate_with_trace(&KeyGenerator::default(), &locales(), &catalog, &mut counter)
        .unwrap();
    assert!(!verdict.passed());
    assert_eq!(counter, LookupCounter { lookups: 2, hits: 1 });
}

#[test]
fn event_mirrors_verdict() {
    let catalog = InMemoryCatalog::new().with_entry("en", "activerecord.attributes.widget.title");
    let verdict = attribute_request()
        .evaluate(&KeyGenerator::default(), &locales(), &catalog)
        .unwrap();
    let lookups = LookupCounter { lookups: 2, hits: 1 };
    let event = CoverageAuditEvent::from_verdict(&verdict, &lookups);
    assert_eq!(event.event, "coverage_check");
    assert_eq!(event.subject, "Widget#title");
    assert!(!event.passed);
    assert_eq!(event.tested_locales, vec!["en", "fr"]);
    assert_eq!(event.failing_locales, vec!["fr"]);
    assert_eq!(event.candidate_count, 1);
    assert_eq!(event.lookup_count, 2);
    assert_eq!(event.hit_count, 1);
}

#[test]
fn file_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let catalog = InMemoryCatalog::new();
    let verdict = attribute_request()
        .evaluate(&KeyGenerator::default(), &locales(), &catalog)
        .unwrap();
    let event = CoverageAuditEvent::from_verdict(&verdict, &LookupCounter { lookups: 2, hits: 0 });
    {
        let sink = FileAuditSink::new(&path).unwrap();
        sink.record(&event);
        sink.record(&event);
    }
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let parsed: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["event"], "coverage_check");
    assert_eq!(parsed["shape"], "model_attribute");
    assert_eq!(parsed["failing_locales"], serde_json::json!(["en", "fr"]));
    assert_eq!(parsed["lookup_count"], 2);
    assert_eq!(parsed["hit_count"], 0);
}
