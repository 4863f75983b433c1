//! Carrier rejection cases and their communication timelines

use crate::error::{TenderingError, TenderingResult};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the carrier communication log,
/// e.g. `2024-10-15 02:15 PM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Other layouts tried after [`TIMESTAMP_FORMAT`] and RFC 3339.
const FALLBACK_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Channel a carrier was contacted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Phone,
    Email,
    Whatsapp,
}

impl std::fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
            Self::Whatsapp => write!(f, "whatsapp"),
        }
    }
}

/// A single contact attempt. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationAttempt {
    /// Stored as supplied; usually [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    pub channel: ContactChannel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl CommunicationAttempt {
    pub fn new(
        timestamp: impl Into<String>,
        channel: ContactChannel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            channel,
            message: message.into(),
            rejection_reason: None,
        }
    }

    /// Attach the reason the carrier gave for turning the offer down
    pub fn rejected_because(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Parse the string timestamp, or `None` if no known layout matches.
    ///
    /// RFC 3339 values are converted to UTC.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            return Some(at);
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.naive_utc());
        }
        FALLBACK_TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}

/// Serialized shape of a case; attempts are replayed through
/// [`CarrierRejectionCase::record_attempt`] on load.
#[derive(Debug, Deserialize)]
pub(crate) struct CaseRecord {
    carrier_id: String,
    carrier_name: String,
    shipment_id: String,
    rejection_count: u32,
    #[serde(default)]
    attempts: Vec<CommunicationAttempt>,
}

/// A carrier's rejection history for one shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CaseRecord")]
pub struct CarrierRejectionCase {
    pub carrier_id: String,
    pub carrier_name: String,
    pub shipment_id: String,
    pub rejection_count: u32,
    /// Chronological, append-only
    attempts: Vec<CommunicationAttempt>,
}

impl TryFrom<CaseRecord> for CarrierRejectionCase {
    type Error = TenderingError;

    fn try_from(record: CaseRecord) -> Result<Self, Self::Error> {
        let mut case = CarrierRejectionCase::new(
            record.carrier_id,
            record.carrier_name,
            record.shipment_id,
            record.rejection_count,
        );
        for attempt in record.attempts {
            case.record_attempt(attempt)?;
        }
        Ok(case)
    }
}

impl CarrierRejectionCase {
    /// Create a case with an empty timeline
    pub fn new(
        carrier_id: impl Into<String>,
        carrier_name: impl Into<String>,
        shipment_id: impl Into<String>,
        rejection_count: u32,
    ) -> Self {
        Self {
            carrier_id: carrier_id.into(),
            carrier_name: carrier_name.into(),
            shipment_id: shipment_id.into(),
            rejection_count,
            attempts: Vec::new(),
        }
    }

    /// Append an attempt to the timeline.
    ///
    /// The attempt must not predate the last recorded one. Ordering is only
    /// checked when both timestamps parse; an unparseable timestamp is kept
    /// as supplied. On error the timeline is left untouched.
    pub fn record_attempt(&mut self, attempt: CommunicationAttempt) -> TenderingResult<()> {
        let previous = self.attempts.last().and_then(|last| {
            let at = last.recorded_at()?;
            Some((last, at))
        });
        if let (Some((last, last_at)), Some(at)) = (previous, attempt.recorded_at()) {
            if at < last_at {
                return Err(TenderingError::OutOfOrderAttempt {
                    attempted: attempt.timestamp,
                    last: last.timestamp.clone(),
                });
            }
        }
        self.attempts.push(attempt);
        Ok(())
    }

    /// Builder form of [`record_attempt`](Self::record_attempt)
    pub fn with_attempt(mut self, attempt: CommunicationAttempt) -> TenderingResult<Self> {
        self.record_attempt(attempt)?;
        Ok(self)
    }

    /// Attempts in recorded order
    pub fn attempts(&self) -> &[CommunicationAttempt] {
        &self.attempts
    }

    pub fn last_attempt(&self) -> Option<&CommunicationAttempt> {
        self.attempts.last()
    }

    /// Rejection reasons in recorded order, skipping attempts without one
    pub fn rejection_reasons(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter_map(|a| a.rejection_reason.as_deref())
            .collect()
    }

    /// Distinct channels in order of first use
    pub fn channels_used(&self) -> Vec<ContactChannel> {
        let mut channels = Vec::new();
        for attempt in &self.attempts {
            if !channels.contains(&attempt.channel) {
                channels.push(attempt.channel);
            }
        }
        channels
    }

    /// Check identifiers are present
    pub fn validate(&self) -> TenderingResult<()> {
        if self.carrier_id.trim().is_empty() {
            return Err(TenderingError::invalid_record(
                &self.shipment_id,
                "carrier id must not be empty",
            ));
        }
        if self.shipment_id.trim().is_empty() {
            return Err(TenderingError::invalid_record(
                &self.carrier_id,
                "shipment id must not be empty",
            ));
        }
        Ok(())
    }
}
