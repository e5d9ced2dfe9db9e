//! Command matching
//!
//! Resolves positional tokens to the deepest command reachable by
//! consecutive exact name matches.

use crate::error::TokenizeError;
use crate::tokenizer::TokenizerOptions;
use crate::tree::{CommandRef, CommandTree};

impl<'a> CommandRef<'a> {
    /// Deepest command matched by `positionals`, starting at this command
    ///
    /// At each level the token is compared with this command's own name
    /// first, then with its children in registration order. Names must be
    /// equal byte for byte.
    pub fn matching_command<S: AsRef<str>>(&self, positionals: &[S]) -> Option<CommandRef<'a>> {
        self.match_depth(positionals).map(|(command, _)| command)
    }

    /// Like [`matching_command`](Self::matching_command), also returning how
    /// many tokens the match consumed
    pub(crate) fn match_depth<S: AsRef<str>>(
        &self,
        positionals: &[S],
    ) -> Option<(CommandRef<'a>, usize)> {
        let (next, rest) = positionals.split_first()?;
        let next = next.as_ref();

        let candidate = if self.name() == next {
            *self
        } else {
            self.child(next)?
        };

        if !rest.is_empty() {
            if let Some((deeper, consumed)) = candidate.match_depth(rest) {
                return Some((deeper, consumed + 1));
            }
        }

        Some((candidate, 1))
    }

    /// Tokenize `raw` and match its positional tokens
    pub fn resolve<S: AsRef<str>>(
        &self,
        raw: &[S],
    ) -> Result<Option<CommandRef<'a>>, TokenizeError> {
        let raw: Vec<String> = raw.iter().map(|s| s.as_ref().to_string()).collect();
        let tokenized = self
            .tree()
            .tokenizer()
            .tokenize(&raw, &self.tree().matching_options())?;
        let positionals = tokenized.positionals();

        let matched = self.matching_command(&positionals);
        match matched {
            Some(command) => log::debug!(
                "resolved {:?} to '{}'",
                positionals,
                command.path().join(" ")
            ),
            None => log::debug!("no command matches {:?}", positionals),
        }
        Ok(matched)
    }
}

impl CommandTree {
    /// Tokenizer options for splitting positionals before a command is known
    pub(crate) fn matching_options(&self) -> TokenizerOptions {
        TokenizerOptions::default().with_booleans(self.unambiguous_switches())
    }

    /// Resolve raw arguments against the root command
    pub fn resolve<S: AsRef<str>>(
        &self,
        raw: &[S],
    ) -> Result<Option<CommandRef<'_>>, TokenizeError> {
        self.root().resolve(raw)
    }
}
