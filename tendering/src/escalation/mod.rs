//! Carrier Escalation — Deterministic triage of repeatedly rejecting carriers
//!
//! Each carrier case carries a rejection count and the ordered log of contact
//! attempts made to place a shipment with that carrier. Triage is a pure
//! threshold check:
//!
//! ```text
//! CarrierRejectionCase
//!     │
//!     ├─ rejection_count < 3  → keep automated tendering
//!     └─ rejection_count >= 3 → assign human operator (escalation panel)
//! ```
//!
//! Cases are pre-classified data; nothing here tracks live events.

pub mod case;
pub mod triage;

pub use case::{CarrierRejectionCase, CommunicationAttempt, ContactChannel, TIMESTAMP_FORMAT};
pub use triage::{
    find_case, EscalationTriage, SuggestedAction, TriageDecision,
    ESCALATION_REJECTION_THRESHOLD,
};
