//! Single-pass comment stripper.
//!
//! Walks the input byte by byte with explicit code/string/comment states.
//! All markers are ASCII, so kept text is copied out in whole slices that
//! always begin and end on character boundaries.

/// Scanner state.
#[derive(Debug, PartialEq)]
enum State {
    Code,
    InString,
    InLineComment,
    InBlockComment,
}

/// What happens to the bytes consumed by one step.
#[derive(Debug, PartialEq)]
enum Span {
    /// Copied to the output.
    Keep,
    /// Start of a comment: replaced by a single space.
    Open,
    /// Inside or closing a comment: dropped.
    Drop,
}

/// Result of one FSM step: how many bytes to consume, what to do with them,
/// and an optional state transition.
struct Step {
    advance: usize,
    span: Span,
    next: Option<State>,
}

impl Step {
    fn keep(advance: usize, next: Option<State>) -> Self {
        Self {
            advance,
            span: Span::Keep,
            next,
        }
    }

    fn open(next: State) -> Self {
        Self {
            advance: 2,
            span: Span::Open,
            next: Some(next),
        }
    }

    fn discard(advance: usize, next: Option<State>) -> Self {
        Self {
            advance,
            span: Span::Drop,
            next,
        }
    }
}

/// Process one byte in code. `block_can_close` tells whether a `*/` exists
/// after the current position; without one `/*` is plain text.
fn step_code(rest: &[u8], block_can_close: bool) -> Step {
    if rest.starts_with(b"//") {
        return Step::open(State::InLineComment);
    }
    if rest.starts_with(b"/*") && block_can_close {
        return Step::open(State::InBlockComment);
    }
    if rest[0] == b'"' {
        return Step::keep(1, Some(State::InString));
    }
    Step::keep(1, None)
}

/// Process one byte inside a string literal. A backslash protects the next
/// byte; a bare newline ends an unterminated string.
fn step_in_string(rest: &[u8]) -> Step {
    match rest[0] {
        b'\\' => Step::keep(rest.len().min(2), None),
        b'"' => Step::keep(1, Some(State::Code)),
        b'\n' => Step::keep(0, Some(State::Code)),
        _ => Step::keep(1, None),
    }
}

/// The line terminator is not part of the comment.
fn step_in_line_comment(ch: u8) -> Step {
    if ch == b'\n' || ch == b'\r' {
        return Step::keep(0, Some(State::Code));
    }
    Step::discard(1, None)
}

fn step_in_block_comment(rest: &[u8]) -> Step {
    if rest.starts_with(b"*/") {
        return Step::discard(2, Some(State::Code));
    }
    Step::discard(1, None)
}

pub(super) fn strip(text: &str) -> String {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let last_close = text.rfind("*/");
    let mut out = String::with_capacity(len);
    let mut state = State::Code;
    let mut kept_from = 0;
    let mut dropping = false;
    let mut i = 0;

    while i < len {
        let rest = &bytes[i..];
        let step = match state {
            State::Code => step_code(rest, last_close.is_some_and(|at| at >= i + 2)),
            State::InString => step_in_string(rest),
            State::InLineComment => step_in_line_comment(rest[0]),
            State::InBlockComment => step_in_block_comment(rest),
        };

        match step.span {
            Span::Keep => {
                if dropping {
                    kept_from = i;
                    dropping = false;
                }
            }
            Span::Open => {
                if !dropping {
                    out.push_str(&text[kept_from..i]);
                }
                out.push(' ');
                dropping = true;
            }
            Span::Drop => {}
        }

        i += step.advance;
        if let Some(next) = step.next {
            state = next;
        }
    }

    if !dropping {
        out.push_str(&text[kept_from..]);
    }
    out
}

#[cfg(test)]
#[path = "fsm_test.rs"]
mod tests;
