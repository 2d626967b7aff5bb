use std::time::{Duration, Instant};

use super::*;

fn is_key(s: &str) -> bool {
    s.len() == PREFIX_LEN + INDEX_LEN && s.chars().all(|c| c.is_ascii_hexdigit())
}

// ── PlaceholderMap ─────────────────────────────────────────────────────

#[test]
fn insert_returns_fresh_hex_keys() {
    let mut map = PlaceholderMap::for_source("");
    assert!(map.is_empty());
    let a = map.insert("\"a\"");
    let b = map.insert("\"b\"");
    assert!(is_key(&a));
    assert!(is_key(&b));
    assert_ne!(a, b);
    assert_eq!(a[..PREFIX_LEN], b[..PREFIX_LEN]);
    assert_eq!(map.len(), 2);
}

#[test]
fn prefix_never_occurs_in_source() {
    let source = "int x = 1; // 0123456789abcdef\n";
    let mut map = PlaceholderMap::for_source(source);
    let key = map.insert("\"s\"");
    assert!(!source.contains(&key[..PREFIX_LEN]));
}

#[test]
fn restore_puts_literals_back() {
    let mut map = PlaceholderMap::for_source("");
    let a = map.insert("\"http://x\"");
    let b = map.insert("\"/*\"");
    let buffer = format!("u = {a}; s = {b};");
    assert_eq!(map.restore(buffer), "u = \"http://x\"; s = \"/*\";");
}

#[test]
fn restore_tolerates_key_removed_with_comment() {
    let mut map = PlaceholderMap::for_source("");
    let _gone = map.insert("\"hi\"");
    assert_eq!(map.restore("  \nx".to_string()), "  \nx");
}

#[test]
#[should_panic(expected = "placeholder")]
fn restore_rejects_duplicated_key() {
    let mut map = PlaceholderMap::for_source("");
    let key = map.insert("\"x\"");
    map.restore(format!("{key} {key}"));
}

#[test]
#[should_panic(expected = "no recorded literal")]
fn restore_rejects_unknown_key() {
    let mut map = PlaceholderMap::for_source("");
    let key = map.insert("\"x\"");
    let forged = format!("{}{:016x}", &key[..PREFIX_LEN], 7);
    map.restore(format!("{key} {forged}"));
}

#[test]
fn restore_keeps_text_around_adjacent_keys() {
    let mut map = PlaceholderMap::for_source("");
    let a = map.insert("\"a\"");
    let b = map.insert("\"b\"");
    assert_eq!(map.restore(format!("({a}{b})")), "(\"a\"\"b\")");
}

// ── mask_strings ───────────────────────────────────────────────────────

#[test]
fn mask_replaces_whole_quoted_literal() {
    let input = "s = \"a//b\";\n";
    let mut map = PlaceholderMap::for_source(input);
    let masked = mask_strings(input, &mut map);
    assert_eq!(map.len(), 1);
    assert!(!masked.contains('"'));
    assert!(!masked.contains("//"));
    assert!(masked.starts_with("s = "));
    assert!(masked.ends_with(";\n"));
}

#[test]
fn mask_is_greedy_within_a_line() {
    // First quote to last quote: both literals and the text between them
    // become one placeholder.
    let mut map = PlaceholderMap::for_source("");
    let masked = mask_strings("f(\"a\", \"b\");\n", &mut map);
    assert_eq!(map.len(), 1);
    let key = masked.trim_start_matches("f(").trim_end_matches(");\n");
    assert!(is_key(key), "{masked:?}");
}

#[test]
fn mask_does_not_cross_lines() {
    let mut map = PlaceholderMap::for_source("");
    let input = "a = \"open\nb = \"close\n";
    let masked = mask_strings(input, &mut map);
    assert!(map.is_empty());
    assert_eq!(masked, input);
}

#[test]
fn mask_handles_missing_final_newline() {
    let mut map = PlaceholderMap::for_source("");
    let masked = mask_strings("x\n\"tail\"", &mut map);
    assert_eq!(map.len(), 1);
    assert!(masked.starts_with("x\n"));
    assert!(is_key(&masked[2..]));
}

// ── comment phases ─────────────────────────────────────────────────────

#[test]
fn line_comment_phase() {
    assert_eq!(strip_line_comments("a // b\nc//d"), "a  \nc ");
    assert_eq!(strip_line_comments("no comments"), "no comments");
}

#[test]
fn block_comment_phase_is_shortest_match() {
    assert_eq!(strip_block_comments("a/*1*/b/*2*/c"), "a b c");
    assert_eq!(strip_block_comments("/* a /* b */ c */"), "  c */");
    assert_eq!(strip_block_comments("x /* open"), "x /* open");
}

// ── full pipeline ──────────────────────────────────────────────────────

#[test]
fn greedy_match_protects_comment_between_strings() {
    let input = "a = \"x\" // \"y\"\n";
    assert_eq!(strip(input), input);
}

#[test]
fn unterminated_quote_does_not_protect_comment() {
    assert_eq!(strip("a = \"oops // c\nb"), "a = \"oops  \nb");
}

#[test]
fn line_comments_run_before_block_comments() {
    // The `//` eats the `*/`, so the block comment has no closing marker
    // on that line and runs to the next one.
    assert_eq!(strip("/* a // b */ c\nd */ e"), "  e");
}

#[test]
fn multibyte_text_survives() {
    assert_eq!(strip("é = \"ü//ö\"; // ñ\n"), "é = \"ü//ö\";  \n");
}

#[test]
fn many_strings_strip_in_linear_time() {
    let input = "s = \"x\"; // c\n".repeat(40_000);
    let start = Instant::now();
    let out = strip(&input);
    let elapsed = start.elapsed();
    assert_eq!(out, "s = \"x\";  \n".repeat(40_000));
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
}
