//! Mock implementations for testing
//!
//! Provides a tokenizer that records the options it was called with.

use crate::error::TokenizeError;
use crate::tokenizer::{FlagTokenizer, Tokenized, Tokenizer, TokenizerOptions};

use std::sync::{Arc, Mutex};

/// Tokenizer double that delegates to [`FlagTokenizer`] and keeps every
/// [`TokenizerOptions`] it receives
#[derive(Debug, Default)]
pub struct RecordingTokenizer {
    inner: FlagTokenizer,
    calls: Arc<Mutex<Vec<TokenizerOptions>>>,
}

impl RecordingTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded calls, usable after the tokenizer has
    /// been moved into a tree
    pub fn calls(&self) -> Arc<Mutex<Vec<TokenizerOptions>>> {
        Arc::clone(&self.calls)
    }
}

impl Tokenizer for RecordingTokenizer {
    fn tokenize(
        &self,
        raw: &[String],
        options: &TokenizerOptions,
    ) -> Result<Tokenized, TokenizeError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(options.clone());
        }
        self.inner.tokenize(raw, options)
    }
}

/// Tokenizer that always fails
#[derive(Debug, Default)]
pub struct FailingTokenizer;

impl Tokenizer for FailingTokenizer {
    fn tokenize(
        &self,
        raw: &[String],
        _options: &TokenizerOptions,
    ) -> Result<Tokenized, TokenizeError> {
        Err(TokenizeError::Malformed(raw.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Command, CommandTree};
    use crate::AppError;

    #[test]
    fn test_recording_tokenizer_records() {
        let tokenizer = RecordingTokenizer::new();
        let calls = tokenizer.calls();
        tokenizer
            .tokenize(&["a".to_string()], &TokenizerOptions::default())
            .unwrap();
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_failing_tokenizer_surfaces_error() {
        let tree = CommandTree::new(Command::new("x").unwrap()).with_tokenizer(FailingTokenizer);
        assert!(matches!(tree.run(&["x"]), Err(AppError::Tokenize(_))));
        assert!(tree.resolve(&["x"]).is_err());
    }
}
