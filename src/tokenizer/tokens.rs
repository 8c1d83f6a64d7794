use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("AND");
        set.insert("OR");
        set.insert("OF");
        set.insert("POINTS");
        set.insert("POINT");
        set.insert("HINTS");
        set.insert("HINT");
        set.insert("EVERY");
        set.insert("MINUTES");
        set.insert("MINUTE");
        set.insert("HOURS");
        set.insert("HOUR");
        set.insert("SOLVE");
        set.insert("UNLOCK");
        set.insert("AFTER");
        set.insert("IF");
        set
    };
}

/// Classifies a bare word: reserved words become keywords, everything
/// else is an identifier. The comparison is case-insensitive but the
/// caller keeps the original lexeme.
pub fn classify_word(word: &str) -> TokenCategory {
    if KEYWORD_LOOKUP.contains(word.to_ascii_uppercase().as_str()) {
        TokenCategory::Keyword
    } else {
        TokenCategory::Identifier
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Comment,
    Keyword,
    KeywordOperator,
    ConstantNumeric,
    ConstantLanguage,
    Identifier,
    ParenOpen,
    ParenClose,
    // Whitespace and the unmatched-character fallback
    Text,
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenCategory::Comment => "comment",
            TokenCategory::Keyword => "keyword",
            TokenCategory::KeywordOperator => "keyword.operator",
            TokenCategory::ConstantNumeric => "constant.numeric",
            TokenCategory::ConstantLanguage => "constant.language",
            TokenCategory::Identifier => "identifier",
            TokenCategory::ParenOpen => "paren.lparen",
            TokenCategory::ParenClose => "paren.rparen",
            TokenCategory::Text => "text",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.category, self.value)
    }
}
