//! Unit tests for the mode registry.

use pretty_assertions::assert_eq;

use crate::errors::errors::Error;
use crate::registry::registry::ModeRegistry;
use crate::tokenizer::tokenizer::{ConfigTokenizer, LexerState, LineTokenizer};
use crate::tokenizer::tokens::{Token, TokenCategory};
use crate::{Span, MK_TOKEN};

// Tokenizer stub that marks whole lines as comments
struct TestTokenizer;

impl LineTokenizer for TestTokenizer {
    fn mode_id(&self) -> &str {
        "test"
    }

    fn tokenize(&self, line: &str, state: LexerState) -> (Vec<Token>, LexerState) {
        let tokens = if line.is_empty() {
            vec![]
        } else {
            vec![MK_TOKEN!(
                TokenCategory::Comment,
                String::from(line),
                Span {
                    start: 0,
                    end: line.len(),
                }
            )]
        };
        (tokens, state)
    }
}

#[test]
fn test_registry_creation() {
    let registry = ModeRegistry::new();

    assert!(registry.list_modes().is_empty());
}

#[test]
fn test_registry_register() {
    let mut registry = ModeRegistry::new();
    registry.register(TestTokenizer);

    assert!(registry.has("test"));
    assert_eq!(registry.list_modes(), vec!["test"]);
}

#[test]
fn test_registry_get() {
    let mut registry = ModeRegistry::new();
    registry.register(TestTokenizer);

    let tokenizer = registry.get("test");
    assert!(tokenizer.is_some());
    assert_eq!(tokenizer.unwrap().mode_id(), "test");
}

#[test]
fn test_registry_get_nonexistent() {
    let registry = ModeRegistry::new();

    assert!(registry.get("nonexistent").is_none());
    assert!(!registry.has("nonexistent"));
}

#[test]
fn test_registry_tokenize() {
    let mut registry = ModeRegistry::new();
    registry.register(TestTokenizer);

    let result = registry.tokenize("test", "# hello", LexerState::Start);
    assert!(result.is_ok());

    let (tokens, next_state) = result.unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::Comment);
    assert_eq!(next_state, LexerState::Start);
}

#[test]
fn test_registry_tokenize_unrecognised_mode() {
    let registry = ModeRegistry::new();

    let result = registry.tokenize("nonexistent", "# hello", LexerState::Start);
    assert_eq!(
        result.unwrap_err(),
        Error::UnrecognisedMode {
            mode: "nonexistent".to_string(),
        }
    );
}

#[test]
fn test_registry_replace_tokenizer() {
    let mut registry = ModeRegistry::new();
    registry.register(TestTokenizer);
    registry.register(TestTokenizer);

    assert_eq!(registry.list_modes().len(), 1);
}

#[test]
fn test_registry_with_defaults() {
    let registry = ModeRegistry::with_defaults();

    assert!(registry.has(ConfigTokenizer::MODE_ID));
    assert_eq!(registry.list_modes(), vec!["hunt_config"]);
}

#[test]
fn test_registry_default_trait() {
    let registry = ModeRegistry::default();

    assert!(registry.has("hunt_config"));
}
