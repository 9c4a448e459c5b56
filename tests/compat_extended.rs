// compat_extended.rs - Free-spacing (`x` flag) behavior end to end.
//
// Each case runs the rewrite through interpret() and, where it matters,
// through the engine, so both the rewritten text and the resulting match
// behavior are pinned.

use bolton::prelude::*;
use pretty_assertions::assert_eq;

fn rewrite(pattern: &str) -> String {
    let (set, out) = interpret(Some("x"), pattern);
    assert!(!set.is_invalid());
    out.into_owned()
}

fn x(pattern: &str, input: &str) {
    let hit = is_match(Some(pattern), Some(input), Some("x"), &EngineConfig::default())
        .unwrap_or_else(|e| panic!("compile failed for {:?}: {}", pattern, e));
    assert!(hit, "x: expected {:?} to match {:?}", pattern, input);
}

fn n(pattern: &str, input: &str) {
    let hit = is_match(Some(pattern), Some(input), Some("x"), &EngineConfig::default())
        .unwrap_or_else(|e| panic!("compile failed for {:?}: {}", pattern, e));
    assert!(!hit, "n: expected {:?} not to match {:?}", pattern, input);
}

// === rewritten text ===

#[test]
fn class_content_kept() {
    assert_eq!(rewrite("[a b#c]"), "[a b#c]");
    assert_eq!(rewrite("[\t]"), "[\t]");
}

#[test]
fn escaped_space_kept_bare_space_dropped() {
    assert_eq!(rewrite("a\\ b"), "a\\ b");
    assert_eq!(rewrite("a\\  b"), "a\\ b");
}

#[test]
fn escaped_backslash_then_space() {
    // `\\` is a complete escape, so the following blank is free-spacing.
    assert_eq!(rewrite("a\\\\ b"), "a\\\\b");
}

#[test]
fn trailing_backslash_kept() {
    assert_eq!(rewrite("ab \\"), "ab\\");
}

#[test]
fn comment_lines_removed() {
    let pattern = "# year\n\\d{4}\n# separator\n-\n# month\n\\d{2}";
    assert_eq!(rewrite(pattern), "\\d{4}-\\d{2}");
}

#[test]
fn indented_hash_is_not_a_comment() {
    // Only a `#` that starts a source line opens a comment.
    assert_eq!(rewrite("a\n  # b"), "a#b");
    assert_eq!(rewrite("ab # c"), "ab#c");
}

#[test]
fn hash_inside_class_on_new_line() {
    assert_eq!(rewrite("[\n#]"), "[\n#]");
}

#[test]
fn escaped_hash_at_line_start() {
    assert_eq!(rewrite("\\# a"), "\\#a");
}

#[test]
fn rewrite_is_idempotent() {
    let samples = [
        "abc",
        "[a b#c]x",
        "a\\ b",
        "\\d+\\.\\d*",
        "(?:foo|bar)[ ]baz",
        "# c\nabc",
        "x y\n# z\nw",
    ];
    for p in samples {
        let once = rewrite(p);
        assert_eq!(rewrite(&once), once, "{p:?}");
    }
}

#[test]
fn non_extended_flags_leave_pattern_alone() {
    let (_, out) = interpret(Some("imgs"), "a b # c");
    assert_eq!(out, "a b # c");
}

// === engine behavior ===

#[test]
fn spaced_pattern_matches() {
    x("h e l l o", "say hello");
    n("h e l l o", "h e l l o");
}

#[test]
fn class_space_matches_space() {
    x("a [ ] b", "a b");
    n("a [ ] b", "ab");
}

#[test]
fn commented_date() {
    let pattern = "# year\n\\d{4}\n-\n# month\n\\d{2}";
    x(pattern, "on 2026-10-17");
    n(pattern, "on 2026/10/17");
}

#[test]
fn literal_hash_mid_line() {
    x("issue #\\d+", "see issue#42");
    n("issue #\\d+", "see issue 42");
}

#[test]
fn extended_with_case_insensitive() {
    let config = EngineConfig::default();
    assert!(is_match(Some("H I"), Some("hi"), Some("xi"), &config).unwrap());
    assert!(is_match(Some("H I"), Some("hi"), Some("ix"), &config).unwrap());
    assert!(!is_match(Some("H I"), Some("hi"), Some("x"), &config).unwrap());
}

#[test]
fn extended_replace() {
    let out = replace(
        Some("2026-10-17"),
        Some("(\\d{4}) - (\\d{2}) - (\\d{2})"),
        Some("$3.$2.$1"),
        Some("x"),
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(out.as_deref(), Some("17.10.2026"));
}
