//! Comment stripping for C-family source text.
//!
//! The [`strip`] module removes `//` line comments and `/* */` block comments
//! while leaving `"`-quoted string literals byte-for-byte intact.

pub mod strip;
