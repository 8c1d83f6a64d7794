//! Lexical highlighting for the hunt configuration language.
//!
//! This module contains the tokenizer that converts one line of config
//! source into a stream of classified tokens for editor display. It
//! handles:
//!
//! - Ordered regex rules with first-match-wins resolution
//! - Keyword classification against the reserved-word table
//! - Puzzle references, relative times, and point/hint amounts
//! - Comments, parens, whitespace, and plain-text fallback

pub mod rules;
pub mod tokenizer;
pub mod tokens;
