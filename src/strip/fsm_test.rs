use super::*;

#[test]
fn empty_input() {
    assert_eq!(strip(""), "");
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(strip("x // end"), "x  ");
}

#[test]
fn escaped_quote_keeps_string_open() {
    assert_eq!(strip(r#"s = "a\"//b"; // c"#), r#"s = "a\"//b";  "#);
}

#[test]
fn escaped_backslash_closes_normally() {
    assert_eq!(strip(r#"s = "\\"; // c"#), r#"s = "\\";  "#);
}

#[test]
fn newline_ends_unterminated_string() {
    assert_eq!(strip("a = \"oops // c\nb // d"), "a = \"oops // c\nb  ");
}

#[test]
fn unterminated_string_at_end_is_passed_through() {
    assert_eq!(strip("x = \"abc /* def"), "x = \"abc /* def");
}

#[test]
fn line_comment_marker_inside_block_is_ignored() {
    assert_eq!(strip("/* a // b */ c"), "  c");
}

#[test]
fn block_comment_marker_inside_line_comment_is_ignored() {
    assert_eq!(strip("a // b /* c\nd */ e"), "a  \nd */ e");
}

#[test]
fn adjacent_comments_each_leave_a_space() {
    assert_eq!(strip("/*a*//*b*/x"), "  x");
    assert_eq!(strip("/*a*/// b\nx"), "  \nx");
}

#[test]
fn slash_star_slash_does_not_close_itself() {
    assert_eq!(strip("/*/ x */y"), " y");
}

#[test]
fn quotes_inside_comments_do_not_open_strings() {
    assert_eq!(strip("/* \" */ a // \"\nb"), "  a  \nb");
}

#[test]
fn multibyte_text_survives() {
    assert_eq!(strip("é = \"ü//ö\"; // ñ\nñ /* ü */ é"), "é = \"ü//ö\";  \nñ   é");
}

#[test]
fn step_code_without_close_treats_marker_as_text() {
    let step = step_code(b"/* x", false);
    assert_eq!(step.span, Span::Keep);
    assert_eq!(step.advance, 1);
    assert!(step.next.is_none());
}

#[test]
fn step_in_string_escape_at_end() {
    let step = step_in_string(b"\\");
    assert_eq!(step.advance, 1);
    assert_eq!(step.span, Span::Keep);
}
