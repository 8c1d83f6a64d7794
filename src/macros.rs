//! Utility macros for the highlighter.
//!
//! This module defines helper macros used throughout the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a highlighting rule from pattern literals
//!
//! These macros reduce boilerplate in the rule table and scan loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$value` - The token's lexeme, casing preserved
/// * `$span` - The byte range within the line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Comment, "# setup".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $span:expr) => {
        Token {
            category: $category,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a highlighting rule from a pattern literal and an action.
///
/// Patterns are compiled once at rule-table construction. The optional
/// third argument is a lookahead pattern that must match immediately
/// after the consumed text but is never consumed itself.
///
/// # Arguments
///
/// * `$pattern` - Anchored regex literal matched at the cursor
/// * `$action` - The RuleAction emitted on a match
/// * `$lookahead` - Optional anchored regex literal tested after the match
///
/// # Example
///
/// ```ignore
/// MK_RULE!("^<=", RuleAction::Single(TokenCategory::KeywordOperator))
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $action:expr) => {
        Rule {
            regex: Regex::new($pattern).unwrap(),
            action: $action,
            lookahead: None,
        }
    };
    ($pattern:literal, $action:expr, $lookahead:literal) => {
        Rule {
            regex: Regex::new($pattern).unwrap(),
            action: $action,
            lookahead: Some(Regex::new($lookahead).unwrap()),
        }
    };
}
