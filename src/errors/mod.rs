//! Error types for the highlighter.
//!
//! Tokenization itself is total and never fails: malformed input degrades
//! to plain-text tokens instead of raising an error. The only fallible
//! operation in the crate is looking up a tokenizer by mode id, and this
//! module defines the error type for that path.

pub mod errors;

#[cfg(test)]
mod tests;
