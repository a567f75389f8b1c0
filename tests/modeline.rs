//! Modeline scanning and interpretation tests
//!
//! Exercises the full scan → tokenize → resolve → apply pipeline against a
//! recording document.

mod common;

use common::{lines_with_modeline, scan, Call, RecordingDocument};
use modeline::modeline::{interpret, resolve, SkipReason};
use modeline::{Directive, IndentMode, ModelineConfig, ModelineRegistry, Scanner};

// ========================================================================
// Registry Resolution
// ========================================================================

#[test]
fn test_name_and_alias_resolve_to_same_option() {
    let registry = ModelineRegistry::default();
    let pairs = [
        ("expandtab", "et"),
        ("tabstop", "ts"),
        ("softtabstop", "sts"),
        ("shiftwidth", "sw"),
        ("fileencoding", "encoding"),
    ];
    for (name, alias) in pairs {
        let by_name = registry.lookup(name).unwrap();
        let by_alias = registry.lookup(alias).unwrap();
        assert_eq!(by_name, by_alias, "{} vs {}", name, alias);
    }
}

#[test]
fn test_resolution_is_case_insensitive() {
    let registry = ModelineRegistry::default();
    assert_eq!(registry.lookup("TabStop"), registry.lookup("tabstop"));
    assert_eq!(
        resolve(&registry, "NoWrap=1"),
        Ok(Directive::LineWrapping(false))
    );
}

// ========================================================================
// Interpretation
// ========================================================================

#[test]
fn test_applying_tabstop_twice_is_idempotent() {
    let registry = ModelineRegistry::default();
    let mut once = RecordingDocument::new(&[]);
    interpret(&mut once, &registry, "tabstop=4");

    let mut twice = RecordingDocument::new(&[]);
    interpret(&mut twice, &registry, "tabstop=4");
    interpret(&mut twice, &registry, "tabstop=4");

    assert_eq!(once.width, 4);
    assert_eq!(twice.width, once.width);
}

#[test]
fn test_width_change_keeps_indent_mode() {
    let registry = ModelineRegistry::default();
    let mut doc = RecordingDocument::new(&[]);
    interpret(&mut doc, &registry, "noexpandtab");
    interpret(&mut doc, &registry, "sw=2");

    assert_eq!(doc.width, 2);
    assert_eq!(doc.mode, IndentMode::Tabs);
}

#[test]
fn test_malformed_tokens_leave_width_unchanged() {
    for line in ["# vim: =4", "# vim: ts="] {
        let mut doc = RecordingDocument::new(&[line]);
        let report = scan(&mut doc);

        assert!(report.found());
        assert_eq!(doc.width, 8, "{}", line);
        assert!(doc.calls.is_empty(), "{}: {:?}", line, doc.calls);
        assert!(report
            .skipped
            .iter()
            .any(|s| s.reason == SkipReason::Malformed));
    }
}

#[test]
fn test_integer_without_value_is_not_applied() {
    let mut doc = RecordingDocument::new(&["/* vim: ts */"]);
    scan(&mut doc);
    assert!(doc.calls.is_empty());
}

#[test]
fn test_non_numeric_width_parses_as_zero() {
    let mut doc = RecordingDocument::new(&["# vim: ts=wide"]);
    scan(&mut doc);
    assert_eq!(doc.width, 0);
}

// ========================================================================
// Scanning
// ========================================================================

#[test]
fn test_later_directive_on_same_line_wins() {
    let mut doc = RecordingDocument::new(&["# vim: et, noexpandtab"]);
    scan(&mut doc);

    assert_eq!(
        doc.setter_calls(),
        vec![
            Call::IndentMode(IndentMode::Spaces),
            Call::IndentMode(IndentMode::Tabs)
        ]
    );
    assert_eq!(doc.mode, IndentMode::Tabs);
}

#[test]
fn test_modeline_past_scan_window_is_ignored() {
    let lines = lines_with_modeline(60, &[(50, "# vim: ts=2")]);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut doc = RecordingDocument::new(&refs);

    let report = scan(&mut doc);

    assert!(!report.found());
    assert_eq!(doc.width, 8);
    assert_eq!(doc.line_reads.get(), 50);
}

#[test]
fn test_modeline_on_last_line_of_window_is_found() {
    let lines = lines_with_modeline(60, &[(49, "# vim: ts=2")]);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut doc = RecordingDocument::new(&refs);

    let report = scan(&mut doc);

    assert_eq!(report.line, Some(49));
    assert_eq!(doc.width, 2);
}

#[test]
fn test_only_first_modeline_is_applied() {
    let lines = lines_with_modeline(8, &[(2, "# vim: ts=2"), (5, "# vim: ts=6 wrap")]);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut doc = RecordingDocument::new(&refs);

    let report = scan(&mut doc);

    assert_eq!(report.line, Some(2));
    assert_eq!(doc.width, 2);
    assert!(!doc.wrapping);
    assert_eq!(doc.line_reads.get(), 3);
}

#[test]
fn test_unregistered_short_form_is_ignored() {
    let mut doc = RecordingDocument::new(&[" vim: noet sts=4 sw=4"]);
    // Trimming drops the leading space, so this bare line has no marker
    assert!(!scan(&mut doc).found());

    let mut doc = RecordingDocument::new(&["# vim: noet sts=4 sw=4"]);
    let report = scan(&mut doc);

    assert_eq!(
        doc.setter_calls(),
        vec![Call::IndentWidth(4), Call::IndentWidth(4)]
    );
    assert_eq!(doc.mode, IndentMode::Spaces);
    assert_eq!(doc.width, 4);
    assert!(report
        .skipped
        .iter()
        .any(|s| s.token == "noet" && s.reason == SkipReason::UnknownKey));
}

#[test]
fn test_geany_fileencoding() {
    let mut doc = RecordingDocument::new(&["# geany: fileencoding=ISO-8859-1"]);
    scan(&mut doc);

    assert_eq!(doc.calls, vec![Call::Encoding("ISO-8859-1".to_string())]);
}

#[test]
fn test_wrap_sets_line_wrapping_once() {
    let mut doc = RecordingDocument::new(&["// vi: wrap"]);
    scan(&mut doc);

    assert_eq!(doc.calls, vec![Call::LineWrapping(true)]);
}

#[test]
fn test_empty_document_reads_no_lines() {
    let mut doc = RecordingDocument::new(&[]);
    let report = scan(&mut doc);

    assert!(!report.found());
    assert_eq!(doc.line_reads.get(), 0);
    assert!(doc.calls.is_empty());
}

#[test]
fn test_invalid_document_is_skipped() {
    let mut doc = RecordingDocument::new(&["# vim: ts=2"]);
    doc.valid = false;
    scan(&mut doc);

    assert_eq!(doc.line_reads.get(), 0);
    assert!(doc.calls.is_empty());
}

#[test]
fn test_ex_marker_with_colon_separated_directives() {
    let mut doc = RecordingDocument::new(&["% ex:et:ts=3:nowrap:"]);
    scan(&mut doc);

    assert_eq!(
        doc.setter_calls(),
        vec![
            Call::IndentMode(IndentMode::Spaces),
            Call::IndentWidth(3),
            Call::LineWrapping(false)
        ]
    );
}

#[test]
fn test_custom_markers_and_window() {
    let config = ModelineConfig {
        scan_lines: 2,
        markers: vec![" kak:".to_string()],
    };
    let registry = ModelineRegistry::default();

    let doc = RecordingDocument::new(&["# vim: ts=2", "# kak: ts=3"]);
    let report = Scanner::new(&registry, &config).scan(&doc);
    assert_eq!(report.line, Some(1));
    assert_eq!(report.directives, vec![Directive::IndentWidth(3)]);

    let doc = RecordingDocument::new(&["a", "b", "# kak: ts=3"]);
    assert!(!Scanner::new(&registry, &config).scan(&doc).found());
}

#[test]
fn test_scanner_does_not_mutate() {
    let doc = RecordingDocument::new(&["# vim: ts=2 et wrap"]);
    let registry = ModelineRegistry::default();
    let config = ModelineConfig::default();

    let report = Scanner::new(&registry, &config).scan(&doc);

    assert_eq!(report.directives.len(), 3);
    assert!(doc.calls.is_empty());
}
