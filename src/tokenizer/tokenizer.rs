use tracing::trace;

use crate::{Span, MK_TOKEN};

use super::{
    rules::{highlight_rules, Rule, RuleAction},
    tokens::{classify_word, Token, TokenCategory},
};

/// Lexer state threaded between consecutive lines for incremental
/// re-lexing. The hunt configuration grammar has a single rule set, so
/// `Start` is the only state and `tokenize` always hands it back; the
/// type exists so callers already thread a resume state and survive a
/// future multi-state grammar unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    #[default]
    Start,
}

/// A line-oriented tokenizer a host editor can drive.
///
/// `tokenize` takes one line of source (no embedded line breaks) plus the
/// state the previous line ended in, and returns tokens covering the line
/// from offset 0 to its end with no gaps or overlaps, together with the
/// state the next line must resume in. It is pure: no side effects, and
/// identical inputs produce identical outputs.
pub trait LineTokenizer: Send + Sync {
    /// The mode identifier hosts use to select this tokenizer.
    fn mode_id(&self) -> &str;

    fn tokenize(&self, line: &str, state: LexerState) -> (Vec<Token>, LexerState);
}

/// Tokenizer for the hunt configuration language.
pub struct ConfigTokenizer {
    rules: Vec<Rule>,
}

impl ConfigTokenizer {
    pub const MODE_ID: &'static str = "hunt_config";

    pub fn new() -> ConfigTokenizer {
        ConfigTokenizer {
            rules: highlight_rules(),
        }
    }

    /// Tokenizes one line. Never fails: input no rule recognises is
    /// emitted as single-character plain-text tokens so the scan always
    /// advances and highlighting degrades instead of erroring.
    pub fn tokenize(&self, line: &str, state: LexerState) -> (Vec<Token>, LexerState) {
        let mut tokens = vec![];
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];
            let mut matched = false;

            for rule in self.rules.iter() {
                let caps = match rule.regex.captures(rest) {
                    Some(caps) => caps,
                    None => continue,
                };
                let whole = caps.get(0).unwrap();

                // a zero-width match cannot advance the scan
                if whole.is_empty() {
                    continue;
                }

                if let Some(lookahead) = &rule.lookahead {
                    if !lookahead.is_match(&rest[whole.end()..]) {
                        continue;
                    }
                }

                match &rule.action {
                    RuleAction::Single(category) => {
                        tokens.push(MK_TOKEN!(
                            *category,
                            String::from(whole.as_str()),
                            Span {
                                start: pos + whole.start(),
                                end: pos + whole.end(),
                            }
                        ));
                    }
                    RuleAction::Groups(categories) => {
                        for (i, category) in categories.iter().enumerate() {
                            let group = match caps.get(i + 1) {
                                Some(group) => group,
                                None => continue,
                            };
                            if group.is_empty() {
                                continue;
                            }
                            tokens.push(MK_TOKEN!(
                                *category,
                                String::from(group.as_str()),
                                Span {
                                    start: pos + group.start(),
                                    end: pos + group.end(),
                                }
                            ));
                        }
                    }
                    RuleAction::KeywordLookup => {
                        tokens.push(MK_TOKEN!(
                            classify_word(whole.as_str()),
                            String::from(whole.as_str()),
                            Span {
                                start: pos + whole.start(),
                                end: pos + whole.end(),
                            }
                        ));
                    }
                }

                pos += whole.end();
                matched = true;
                break;
            }

            if !matched {
                // malformed input: one full character of plain text
                let width = rest.chars().next().map_or(1, char::len_utf8);
                trace!("no rule matched at offset {}, emitting plain text", pos);
                tokens.push(MK_TOKEN!(
                    TokenCategory::Text,
                    String::from(&rest[..width]),
                    Span {
                        start: pos,
                        end: pos + width,
                    }
                ));
                pos += width;
            }
        }

        (tokens, state)
    }

    /// Tokenizes a whole buffer line by line, threading each line's end
    /// state into the next line's start state.
    pub fn tokenize_lines(&self, source: &str) -> Vec<Vec<Token>> {
        let mut state = LexerState::default();

        source
            .split('\n')
            .map(|line| {
                let (tokens, next_state) = self.tokenize(line, state);
                state = next_state;
                tokens
            })
            .collect()
    }
}

impl Default for ConfigTokenizer {
    fn default() -> Self {
        ConfigTokenizer::new()
    }
}

impl LineTokenizer for ConfigTokenizer {
    fn mode_id(&self) -> &str {
        ConfigTokenizer::MODE_ID
    }

    fn tokenize(&self, line: &str, state: LexerState) -> (Vec<Token>, LexerState) {
        ConfigTokenizer::tokenize(self, line, state)
    }
}
