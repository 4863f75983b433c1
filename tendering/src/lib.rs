//! Tendering Assistant core library
//!
//! Deterministic decision logic behind the freight tendering board:
//! - Assignment policy: is a shipment's carrier assignment optimal under the
//!   selected criterion (`percentage` or `cost`)
//! - Escalation triage: which carriers have rejected often enough to need a
//!   human operator, and what their communication timeline looks like
//!
//! Both components are pure functions over in-memory data. Loading feeds and
//! configuration is the only I/O in the crate.
//!
//! # Usage
//!
//! ```no_run
//! use tendering::{sample, AssignmentCriterion, DashboardSnapshot};
//!
//! let shipments = sample::shipments()?;
//! let cases = sample::carrier_cases()?;
//! let snapshot = DashboardSnapshot::build(AssignmentCriterion::Cost, &shipments, &cases);
//! println!("{} optimal, {} escalations", snapshot.optimal_count, snapshot.escalations.len());
//! # Ok::<(), tendering::TenderingError>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod escalation;
pub mod feed;
pub mod policy;
pub mod sample;
pub mod shipment;

pub use config::TenderingConfig;
pub use dashboard::{DashboardSnapshot, StatusSummary};
pub use error::{TenderingError, TenderingResult};
pub use escalation::{
    find_case, CarrierRejectionCase, CommunicationAttempt, ContactChannel, EscalationTriage,
    SuggestedAction, TriageDecision, ESCALATION_REJECTION_THRESHOLD,
};
pub use policy::{
    evaluate_str, is_optimal, AssignmentCriterion, AssignmentPolicyEvaluator,
    ShipmentAssessment, MAX_OPTIMAL_COST, MIN_OPTIMAL_ASSIGNMENT_PERCENTAGE,
};
pub use shipment::{ShipmentRecord, ShipmentStatus};
