//! Core types and structures for passcheck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Validation mode selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Score character composition into a strength tier
    Strength { minimum_length: usize },
    /// Ask the word-lookup API whether the password is a dictionary word
    Dictionary,
}

/// Password strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Strong,
    Soft,
    Weak,
    Invalid,
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthTier::Strong => write!(f, "strong"),
            StrengthTier::Soft => write!(f, "soft"),
            StrengthTier::Weak => write!(f, "weak"),
            StrengthTier::Invalid => write!(f, "invalid"),
        }
    }
}

/// Dictionary lookup outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupOutcome {
    Found,
    NotFound,
    Error,
}

impl std::fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupOutcome::Found => write!(f, "found"),
            LookupOutcome::NotFound => write!(f, "notfound"),
            LookupOutcome::Error => write!(f, "error"),
        }
    }
}

/// Final verdict produced by the canonical validation entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Strong,
    Soft,
    Weak,
    Invalid,
    PresentInDictionary,
    NotPresentInDictionary,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Strong => write!(f, "strong"),
            Verdict::Soft => write!(f, "soft"),
            Verdict::Weak => write!(f, "weak"),
            Verdict::Invalid => write!(f, "invalid"),
            Verdict::PresentInDictionary => write!(f, "present-in-dictionary"),
            Verdict::NotPresentInDictionary => write!(f, "not-present-in-dictionary"),
        }
    }
}

impl From<StrengthTier> for Verdict {
    fn from(tier: StrengthTier) -> Self {
        match tier {
            StrengthTier::Strong => Verdict::Strong,
            StrengthTier::Soft => Verdict::Soft,
            StrengthTier::Weak => Verdict::Weak,
            StrengthTier::Invalid => Verdict::Invalid,
        }
    }
}

/// Result of one dictionary lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub outcome: LookupOutcome,
    pub checked_at: DateTime<Utc>,
    pub lookup_duration: Option<Duration>,
    pub error_message: Option<String>,
}

/// Configuration for the dictionary lookup client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connection_pool_size: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.datamuse.com".to_string(),
            timeout: Duration::from_secs(10),
            connection_pool_size: 4,
        }
    }
}

/// Atomic counters for lookup activity
#[derive(Debug, Default)]
pub struct LookupMetrics {
    words_checked: AtomicU64,
    errors_encountered: AtomicU64,
    total_lookup_ms: AtomicU64,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_words_checked(&self) {
        self.words_checked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_errors(&self) {
        self.errors_encountered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_lookup_time(&self, millis: u64) {
        self.total_lookup_ms.fetch_add(millis, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters
    pub fn get_stats(&self) -> MetricsSnapshot {
        let words_checked = self.words_checked.load(Ordering::Relaxed);
        let total_ms = self.total_lookup_ms.load(Ordering::Relaxed);

        MetricsSnapshot {
            words_checked,
            errors_encountered: self.errors_encountered.load(Ordering::Relaxed),
            avg_lookup_ms: if words_checked > 0 {
                total_ms / words_checked
            } else {
                0
            },
        }
    }
}

/// Snapshot of lookup metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub words_checked: u64,
    pub errors_encountered: u64,
    pub avg_lookup_ms: u64,
}
