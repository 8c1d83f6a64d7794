use regex::Regex;

use crate::MK_RULE;

use super::tokens::TokenCategory;

/// What the scan loop emits when a rule's pattern matches.
#[derive(Clone)]
pub enum RuleAction {
    /// One token spanning the whole match.
    Single(TokenCategory),
    /// One token per non-empty capture group, in group order.
    Groups(Vec<TokenCategory>),
    /// One token spanning the whole match, classified through the
    /// keyword table.
    KeywordLookup,
}

#[derive(Clone)]
pub struct Rule {
    pub regex: Regex,
    pub action: RuleAction,
    /// Anchored pattern that must match immediately after the consumed
    /// text. Never consumed: the cursor advances by the match alone.
    pub lookahead: Option<Regex>,
}

/// The fixed rule table for the hunt configuration language.
///
/// Rules are tried in declaration order against the unconsumed suffix of
/// the line and the first match wins, so the specific constant patterns
/// must stay ahead of the generic word rule.
pub fn highlight_rules() -> Vec<Rule> {
    vec![
        MK_RULE!("^#.*", RuleAction::Single(TokenCategory::Comment)),
        MK_RULE!(
            "^(?i)(EVERY)(\\s+)(\\d+)(\\s+)(MINUTES?|HOURS?)",
            RuleAction::Groups(vec![
                TokenCategory::Keyword,
                TokenCategory::Text,
                TokenCategory::ConstantNumeric,
                TokenCategory::Text,
                TokenCategory::Keyword,
            ])
        ),
        MK_RULE!(
            "^(?i)(P\\w+)(\\s+)(SOLVE|UNLOCK)\\b",
            RuleAction::Groups(vec![
                TokenCategory::Keyword,
                TokenCategory::Text,
                TokenCategory::ConstantLanguage,
            ])
        ),
        // Puzzle references: hex puzzle ids such as P1a, and the Px
        // template form expanded by the config preprocessor
        MK_RULE!(
            "^[Pp](?:[a-fA-F0-9]+|[Xx])\\b",
            RuleAction::Single(TokenCategory::ConstantLanguage)
        ),
        // Relative time since hunt start, +H:MM or +HH:MM
        MK_RULE!(
            "^\\+\\d?\\d:\\d\\d\\b",
            RuleAction::Single(TokenCategory::ConstantLanguage)
        ),
        // A number is only a point/hint amount when its unit follows;
        // the unit word itself is re-scanned by the word rule below
        MK_RULE!(
            "^\\d+",
            RuleAction::Single(TokenCategory::ConstantNumeric),
            "^\\s*(?:POINTS?|HINTS?)\\b"
        ),
        MK_RULE!("^[a-zA-Z]+\\b", RuleAction::KeywordLookup),
        MK_RULE!("^[\\[\\(]", RuleAction::Single(TokenCategory::ParenOpen)),
        MK_RULE!("^[\\]\\)]", RuleAction::Single(TokenCategory::ParenClose)),
        MK_RULE!("^<=", RuleAction::Single(TokenCategory::KeywordOperator)),
        MK_RULE!("^\\s+", RuleAction::Single(TokenCategory::Text)),
    ]
}
