//! Word-lookup client for the Datamuse API

use crate::dictionary::DictionarySource;
use crate::error::{PasscheckError, Result};
use crate::types::{LookupConfig, LookupMetrics, LookupOutcome, LookupResult, MetricsSnapshot};
use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;

/// Dictionary lookup client backed by the Datamuse word API
pub struct DictionaryClient {
    config: LookupConfig,
    client: Client,
    metrics: Arc<LookupMetrics>,
}

impl DictionaryClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(LookupConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: LookupConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("passcheck/0.1.0")
            .pool_max_idle_per_host(config.connection_pool_size)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create pooled HTTP client: {}. Using default.", e);
                Client::new()
            });

        let metrics = Arc::new(LookupMetrics::new());

        Self {
            config,
            client,
            metrics,
        }
    }

    /// Look up a single word.
    ///
    /// One outbound GET per invocation; no retries, no caching. Transport,
    /// timeout, and parse failures come back as `LookupOutcome::Error` with
    /// the cause in `error_message` rather than as `Err`, so the caller can
    /// apply its assume-not-found policy without unwinding.
    pub async fn lookup_word(&self, word: &str) -> Result<LookupResult> {
        let start_time = Instant::now();

        match self.fetch_entries(word).await {
            Ok(entries) => {
                let duration = start_time.elapsed();
                self.metrics.increment_words_checked();
                self.metrics.add_lookup_time(duration.as_millis() as u64);

                let outcome = if entry_matches(&entries, word) {
                    LookupOutcome::Found
                } else {
                    LookupOutcome::NotFound
                };

                tracing::debug!(
                    word = %word,
                    outcome = %outcome,
                    entries = %entries.len(),
                    duration_ms = %duration.as_millis(),
                    "Word lookup completed"
                );

                Ok(LookupResult {
                    word: word.to_string(),
                    outcome,
                    checked_at: Utc::now(),
                    lookup_duration: Some(duration),
                    error_message: None,
                })
            }
            Err(e) if e.treat_as_not_found() => {
                let duration = start_time.elapsed();
                self.metrics.increment_errors();

                tracing::warn!(
                    word = %word,
                    error = %e,
                    duration_ms = %duration.as_millis(),
                    "Word lookup failed"
                );

                Ok(LookupResult {
                    word: word.to_string(),
                    outcome: LookupOutcome::Error,
                    checked_at: Utc::now(),
                    lookup_duration: Some(duration),
                    error_message: Some(e.to_string()),
                })
            }
            Err(e) => {
                self.metrics.increment_errors();
                Err(e)
            }
        }
    }

    /// Look up multiple words concurrently.
    ///
    /// Calls are independent and share no state; completion order between
    /// them is unspecified, results come back in input order.
    pub async fn lookup_words(&self, words: &[String]) -> Result<Vec<LookupResult>> {
        let batch_start = Instant::now();
        let futures = words.iter().map(|word| self.lookup_word(word));
        let results = join_all(futures).await;

        let mut lookup_results = Vec::with_capacity(words.len());
        let mut error_count = 0u32;

        for (word, result) in words.iter().zip(results) {
            match result {
                Ok(lookup_result) => lookup_results.push(lookup_result),
                Err(e) => {
                    error_count += 1;
                    tracing::warn!(word = %word, error = %e, "Failed to look up word");
                }
            }
        }

        tracing::info!(
            words_requested = %words.len(),
            words_processed = %lookup_results.len(),
            errors = %error_count,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch word lookup completed"
        );

        Ok(lookup_results)
    }

    async fn fetch_entries(&self, word: &str) -> Result<Vec<WordEntry>> {
        let url = format!("{}/words", self.config.base_url.trim_end_matches('/'));
        let timeout_secs = self.config.timeout.as_secs();

        // Percent-encoding of the word is handled by the query serializer
        let request = self.client.get(&url).query(&[("sp", word)]);

        let response = timeout(self.config.timeout, request.send())
            .await
            .map_err(|_| PasscheckError::timeout("word lookup request", timeout_secs))?
            .map_err(|e| PasscheckError::network(e.to_string(), None, Some(url.clone())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PasscheckError::network(
                format!("word lookup request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PasscheckError::network(e.to_string(), None, Some(url)))?;

        let entries: Vec<WordEntry> = serde_json::from_str(&text)
            .map_err(|e| PasscheckError::parse(e.to_string(), Some(text)))?;

        Ok(entries)
    }

    /// Get client configuration
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Get lookup metrics
    pub fn get_metrics(&self) -> Arc<LookupMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionarySource for DictionaryClient {
    async fn lookup_word(&self, word: &str) -> Result<LookupResult> {
        DictionaryClient::lookup_word(self, word).await
    }

    fn source_name(&self) -> &str {
        "datamuse"
    }
}

/// True when some entry's "word" field equals the query exactly.
/// The API returns close spellings too, so a non-empty array alone
/// proves nothing.
fn entry_matches(entries: &[WordEntry], word: &str) -> bool {
    entries.iter().any(|entry| entry.word.as_deref() == Some(word))
}

/// One element of the API's JSON response array
#[derive(Debug, Deserialize)]
struct WordEntry {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    score: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(json: &str) -> Vec<WordEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_exact_match_found() {
        let entries = parse(r#"[{"word":"table","score":3125},{"word":"cable","score":2540}]"#);
        assert!(entry_matches(&entries, "table"));
        assert!(entry_matches(&entries, "cable"));
    }

    #[test]
    fn test_close_spelling_is_not_a_match() {
        let entries = parse(r#"[{"word":"tables","score":3125}]"#);
        assert!(!entry_matches(&entries, "table"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let entries = parse(r#"[{"word":"table"}]"#);
        assert!(!entry_matches(&entries, "Table"));
    }

    #[test]
    fn test_empty_array_is_not_found() {
        let entries = parse("[]");
        assert!(!entry_matches(&entries, "table"));
    }

    #[test]
    fn test_entries_without_word_key_are_tolerated() {
        let entries = parse(r#"[{"score":10},{"word":"table"}]"#);
        assert!(entry_matches(&entries, "table"));
        assert!(!entry_matches(&entries, "chair"));
    }

    #[test]
    fn test_non_array_body_is_a_parse_error() {
        let result: std::result::Result<Vec<WordEntry>, _> =
            serde_json::from_str(r#"{"word":"table"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = DictionaryClient::new();
        assert_eq!(client.config().timeout, Duration::from_secs(10));
        assert_eq!(client.source_name(), "datamuse");
    }

    #[tokio::test]
    async fn test_initial_metrics_are_zero() {
        let client = DictionaryClient::new();
        let stats = client.get_metrics_snapshot();
        assert_eq!(stats.words_checked, 0);
        assert_eq!(stats.errors_encountered, 0);
    }

    #[tokio::test]
    async fn test_unreachable_host_degrades_to_error_outcome() {
        let config = LookupConfig {
            // Reserved TLD, resolution fails fast
            base_url: "http://lookup.invalid".to_string(),
            timeout: Duration::from_secs(2),
            ..LookupConfig::default()
        };
        let client = DictionaryClient::with_config(config);

        let result = client.lookup_word("table").await.unwrap();
        assert_eq!(result.outcome, LookupOutcome::Error);
        assert!(result.error_message.is_some());
        assert_eq!(client.get_metrics_snapshot().errors_encountered, 1);
    }
}
