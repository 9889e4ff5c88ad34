//! Dictionary word lookup module

pub mod client;

// Re-export main functionality
pub use client::DictionaryClient;

use crate::error::Result;
use crate::types::LookupResult;
use async_trait::async_trait;

/// Trait for dictionary lookup backends
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Look up a single word and report whether the dictionary contains it
    async fn lookup_word(&self, word: &str) -> Result<LookupResult>;

    /// Name of the backing source, for logging
    fn source_name(&self) -> &str;
}
