use std::collections::HashMap;

use tracing::debug;

use crate::errors::errors::Error;
use crate::tokenizer::tokenizer::{ConfigTokenizer, LexerState, LineTokenizer};
use crate::tokenizer::tokens::Token;

/// Registry of line tokenizers, keyed by mode id.
pub struct ModeRegistry {
    modes: HashMap<String, Box<dyn LineTokenizer>>,
}

impl ModeRegistry {
    /// Creates an empty registry.
    pub fn new() -> ModeRegistry {
        ModeRegistry {
            modes: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in hunt-config tokenizer
    /// registered.
    pub fn with_defaults() -> ModeRegistry {
        let mut registry = ModeRegistry::new();
        registry.register(ConfigTokenizer::new());
        registry
    }

    /// Registers a tokenizer under its mode id.
    ///
    /// If a tokenizer with the same mode id already exists, it is
    /// replaced.
    pub fn register<T: LineTokenizer + 'static>(&mut self, tokenizer: T) {
        debug!("registering tokenizer mode {:?}", tokenizer.mode_id());
        self.modes
            .insert(tokenizer.mode_id().to_string(), Box::new(tokenizer));
    }

    /// Gets a tokenizer by mode id.
    pub fn get(&self, mode_id: &str) -> Option<&dyn LineTokenizer> {
        self.modes.get(mode_id).map(|tokenizer| tokenizer.as_ref())
    }

    /// Checks whether a mode is registered.
    pub fn has(&self, mode_id: &str) -> bool {
        self.modes.contains_key(mode_id)
    }

    /// Lists all registered mode ids (sorted).
    pub fn list_modes(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.modes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Tokenizes one line using the named mode.
    pub fn tokenize(
        &self,
        mode_id: &str,
        line: &str,
        state: LexerState,
    ) -> Result<(Vec<Token>, LexerState), Error> {
        let tokenizer = self.get(mode_id).ok_or_else(|| Error::UnrecognisedMode {
            mode: mode_id.to_string(),
        })?;
        Ok(tokenizer.tokenize(line, state))
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
