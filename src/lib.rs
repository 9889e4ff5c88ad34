//! Passcheck - password strength classification and dictionary lookup
//!
//! Classifies a candidate password either by scoring its character
//! composition into a strength tier, or by asking the Datamuse word API
//! whether it is a dictionary word.

pub mod dictionary;
pub mod error;
pub mod strength;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use error::{PasscheckError, Result};
pub use types::{
    LookupConfig, LookupMetrics, LookupOutcome, LookupResult, MetricsSnapshot, Mode, StrengthTier,
    Verdict,
};

// Re-export main functionality
pub use dictionary::{DictionaryClient, DictionarySource};
pub use strength::classify;
pub use validator::PasswordValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
