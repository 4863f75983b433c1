//! Tendering error types
//!
//! One error enum for every fallible operation in the crate. The evaluator
//! and triage themselves are infallible over typed input; errors only arise
//! at the edges where text, files and configuration are turned into values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tendering operations
pub type TenderingResult<T> = Result<T, TenderingError>;

/// Errors that can occur while parsing, loading or validating tendering data
#[derive(Error, Debug)]
pub enum TenderingError {
    /// Assignment criterion text is neither `percentage` nor `cost`
    #[error("Invalid assignment criterion '{value}': expected 'percentage' or 'cost'")]
    InvalidCriterion { value: String },

    /// A shipment or carrier case violates a data-model constraint
    #[error("Invalid record {id}: {message}")]
    InvalidRecord { id: String, message: String },

    /// Two shipments in one feed share an identifier
    #[error("Duplicate shipment id: {shipment_id}")]
    DuplicateShipment { shipment_id: String },

    /// No carrier case exists for the requested carrier
    #[error("Unknown carrier: {carrier_id}")]
    UnknownCarrier { carrier_id: String },

    /// Attempt would be recorded before the last one already in the timeline
    #[error("Attempt at {attempted} recorded after later attempt at {last}")]
    OutOfOrderAttempt { attempted: String, last: String },

    /// Feed file not found
    #[error("Feed not found at {path}")]
    FeedNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TenderingError {
    /// Create an invalid criterion error
    pub fn invalid_criterion(value: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            value: value.into(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an unknown carrier error
    pub fn unknown_carrier(carrier_id: impl Into<String>) -> Self {
        Self::UnknownCarrier {
            carrier_id: carrier_id.into(),
        }
    }

    /// Create a feed not found error
    pub fn feed_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FeedNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Whether the error came from caller-supplied arguments rather than I/O
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidCriterion { .. }
                | Self::InvalidRecord { .. }
                | Self::DuplicateShipment { .. }
                | Self::UnknownCarrier { .. }
                | Self::OutOfOrderAttempt { .. }
        )
    }
}
