/// Mask / strip / restore pipeline.
///
/// Every quoted string is swapped for an opaque key before any comment
/// pattern runs, so a `//` or `/*` inside a string literal can never be
/// mistaken for a comment marker. The keys are put back at the end.
use std::sync::LazyLock;

use regex::{Captures, Regex};
use uuid::Uuid;

/// Opening quote to the last quote of the line (greedy).
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"".*""#).expect("quoted string pattern"));

/// `//` up to, not including, the line terminator.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\r\n]*").expect("line comment pattern"));

/// `/*` to the nearest `*/`, across lines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));

/// Hex digits of the per-call key prefix.
const PREFIX_LEN: usize = 32;

/// Hex digits of the per-key counter appended to the prefix.
const INDEX_LEN: usize = 16;

/// Placeholder key -> original quoted literal (quotes included).
///
/// Lives for a single [`strip`] call. Every key is one random prefix that
/// does not occur in the input, followed by a fixed-width counter, so keys
/// are unique, cannot be confused with input text, and are pure lowercase
/// hex: they never contain `/`, `*` or `"` and cannot take part in a
/// comment marker or a later string match.
#[derive(Debug)]
pub struct PlaceholderMap {
    prefix: String,
    literals: Vec<String>,
}

impl PlaceholderMap {
    /// Create an empty map whose keys cannot occur in `source`.
    pub fn for_source(source: &str) -> Self {
        let prefix = loop {
            let candidate = Uuid::new_v4().simple().to_string();
            if !source.contains(&candidate) {
                break candidate;
            }
        };
        Self {
            prefix,
            literals: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Record `literal` under a fresh key and return the key.
    pub fn insert(&mut self, literal: &str) -> String {
        let key = format!(
            "{}{:0width$x}",
            self.prefix,
            self.literals.len(),
            width = INDEX_LEN
        );
        self.literals.push(literal.to_string());
        key
    }

    /// Put every recorded literal back in place of its key, in one pass.
    ///
    /// A key that no longer appears was inside a comment and went away with
    /// it. A key with no recorded literal, or one appearing more than once,
    /// means the buffer was corrupted.
    pub fn restore(self, buffer: String) -> String {
        if self.literals.is_empty() {
            return buffer;
        }
        let pattern = format!("{}[0-9a-f]{{{INDEX_LEN}}}", self.prefix);
        let keys = Regex::new(&pattern).expect("placeholder pattern");
        let mut restored = vec![false; self.literals.len()];

        let out = keys.replace_all(&buffer, |caps: &Captures<'_>| {
            let key = &caps[0];
            let index = usize::from_str_radix(&key[PREFIX_LEN..], 16)
                .ok()
                .filter(|&i| i < self.literals.len());
            let Some(index) = index else {
                panic!("placeholder {key} has no recorded literal");
            };
            assert!(
                !restored[index],
                "placeholder {key} found more than once in the working buffer"
            );
            restored[index] = true;
            self.literals[index].clone()
        });

        let dropped = restored.iter().filter(|&&hit| !hit).count();
        if dropped > 0 {
            log::trace!("{dropped} placeholder(s) were removed together with comments");
        }
        out.into_owned()
    }
}

/// Replace quoted strings with placeholder keys, line by line.
///
/// A line with a single quote has no match and is kept as is; the search
/// never continues onto the next line.
pub(super) fn mask_strings(text: &str, placeholders: &mut PlaceholderMap) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let mut line = line.to_string();
        while let Some(found) = QUOTED.find(&line) {
            let range = found.range();
            let key = placeholders.insert(found.as_str());
            line.replace_range(range, &key);
        }
        out.push_str(&line);
    }
    out
}

pub(super) fn strip_line_comments(buffer: &str) -> String {
    LINE_COMMENT.replace_all(buffer, " ").into_owned()
}

pub(super) fn strip_block_comments(buffer: &str) -> String {
    BLOCK_COMMENT.replace_all(buffer, " ").into_owned()
}

/// Run the four phases in order: mask, line comments, block comments, restore.
pub(super) fn strip(text: &str) -> String {
    let mut placeholders = PlaceholderMap::for_source(text);
    let masked = mask_strings(text, &mut placeholders);
    log::debug!("masked {} string literal(s)", placeholders.len());
    let buffer = strip_line_comments(&masked);
    let buffer = strip_block_comments(&buffer);
    placeholders.restore(buffer)
}

#[cfg(test)]
#[path = "mask_test.rs"]
mod tests;
