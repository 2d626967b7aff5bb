//! Comment stripper: turns source text into comment-free text while keeping
//! `"`-quoted string literals exactly as written.
//!
//! Two interchangeable strategies are provided. `Mask` hides string literals
//! behind unique placeholders, strips comments with regular expressions and
//! restores the literals afterwards. `Scan` walks the text once with a small
//! state machine. Both remove a comment by replacing it with a single space.

mod fsm;
mod mask;

use serde::{Deserialize, Serialize};

pub use mask::PlaceholderMap;

/// Which implementation of the stripper to run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Mask strings with placeholders, strip comments, restore strings.
    #[default]
    Mask,
    /// Single pass over the text with explicit code/string/comment states.
    Scan,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Mask => "mask",
            Strategy::Scan => "scan",
        }
    }
}

/// Strip `//` and `/* */` comments from `text` using the default strategy.
///
/// An unterminated `/*` is left in place, and so is everything after it.
#[must_use]
pub fn strip(text: &str) -> String {
    strip_with(text, Strategy::default())
}

/// Strip comments from `text` with an explicit strategy.
#[must_use]
pub fn strip_with(text: &str, strategy: Strategy) -> String {
    match strategy {
        Strategy::Mask => mask::strip(text),
        Strategy::Scan => fsm::strip(text),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
