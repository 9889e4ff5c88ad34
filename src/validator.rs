//! Canonical password validation entry point

use crate::dictionary::{DictionaryClient, DictionarySource};
use crate::strength::classify;
use crate::types::{LookupConfig, LookupOutcome, Mode, Verdict};
use std::sync::Arc;

/// Password validator dispatching on the selected [`Mode`].
///
/// Strength mode is pure and does no I/O. Dictionary mode delegates to the
/// configured [`DictionarySource`] and folds every lookup failure into
/// `NotPresentInDictionary`; the validator never returns an error to the
/// caller.
pub struct PasswordValidator {
    dictionary: Arc<dyn DictionarySource>,
}

impl PasswordValidator {
    /// Create a validator backed by the Datamuse API with default settings
    pub fn new() -> Self {
        Self::with_source(Arc::new(DictionaryClient::new()))
    }

    /// Create a validator with custom lookup configuration
    pub fn with_config(config: LookupConfig) -> Self {
        Self::with_source(Arc::new(DictionaryClient::with_config(config)))
    }

    /// Create a validator over an arbitrary dictionary backend
    pub fn with_source(dictionary: Arc<dyn DictionarySource>) -> Self {
        Self { dictionary }
    }

    /// Validate a password and return a terminal verdict
    pub async fn validate(&self, password: &str, mode: Mode) -> Verdict {
        match mode {
            Mode::Strength { minimum_length } => classify(password, minimum_length).into(),
            Mode::Dictionary => self.check_dictionary(password).await,
        }
    }

    async fn check_dictionary(&self, password: &str) -> Verdict {
        match self.dictionary.lookup_word(password).await {
            Ok(result) => match result.outcome {
                LookupOutcome::Found => Verdict::PresentInDictionary,
                LookupOutcome::NotFound => Verdict::NotPresentInDictionary,
                LookupOutcome::Error => {
                    // Assume not found; the cause is already logged by the client
                    Verdict::NotPresentInDictionary
                }
            },
            Err(e) => {
                tracing::warn!(
                    source = %self.dictionary.source_name(),
                    error = %e,
                    "Dictionary lookup failed, assuming word is not present"
                );
                Verdict::NotPresentInDictionary
            }
        }
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}
