//! Escalation Triage — which carriers need a human operator
//!
//! Pure threshold check over pre-classified rejection cases. No state is kept
//! between calls; the same case always yields the same decision.

use crate::error::{TenderingError, TenderingResult};
use crate::escalation::case::{CarrierRejectionCase, CommunicationAttempt};
use serde::{Deserialize, Serialize};

/// Rejection count at which a carrier case is handed to a human
pub const ESCALATION_REJECTION_THRESHOLD: u32 = 3;

/// What the tendering desk should do with a carrier case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Keep tendering through the automated channels
    KeepAutomated,
    /// Take the carrier out of automation and assign a human operator
    AssignHumanOperator,
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeepAutomated => write!(f, "keep automated"),
            Self::AssignHumanOperator => write!(f, "assign human operator"),
        }
    }
}

/// Decision produced by triage for one carrier case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageDecision {
    pub carrier_id: String,
    pub carrier_name: String,
    pub shipment_id: String,
    pub rejection_count: u32,
    pub threshold: u32,
    /// Whether the case belongs in the escalation panel
    pub escalate: bool,
    pub action: SuggestedAction,
    pub reason: String,
}

/// Escalation triage over carrier rejection cases
#[derive(Debug, Clone, Copy, Default)]
pub struct EscalationTriage;

impl EscalationTriage {
    pub fn new() -> Self {
        Self
    }

    /// `true` iff the case has been rejected at least three times
    pub fn needs_escalation(&self, case: &CarrierRejectionCase) -> bool {
        case.rejection_count >= ESCALATION_REJECTION_THRESHOLD
    }

    /// Communication attempts in original recorded order
    pub fn timeline<'a>(&self, case: &'a CarrierRejectionCase) -> &'a [CommunicationAttempt] {
        case.attempts()
    }

    /// Cases needing escalation, in input order
    pub fn escalation_set<'a>(
        &self,
        cases: &'a [CarrierRejectionCase],
    ) -> Vec<&'a CarrierRejectionCase> {
        cases.iter().filter(|c| self.needs_escalation(c)).collect()
    }

    /// Full decision for one case
    pub fn triage(&self, case: &CarrierRejectionCase) -> TriageDecision {
        let escalate = self.needs_escalation(case);
        let (action, reason) = if escalate {
            tracing::warn!(
                carrier = %case.carrier_id,
                shipment = %case.shipment_id,
                rejections = case.rejection_count,
                "Carrier needs human follow-up"
            );
            (
                SuggestedAction::AssignHumanOperator,
                format!(
                    "{} rejections (threshold {}) for shipment {}",
                    case.rejection_count, ESCALATION_REJECTION_THRESHOLD, case.shipment_id
                ),
            )
        } else {
            (
                SuggestedAction::KeepAutomated,
                format!(
                    "{} of {} rejections before escalation",
                    case.rejection_count, ESCALATION_REJECTION_THRESHOLD
                ),
            )
        };

        TriageDecision {
            carrier_id: case.carrier_id.clone(),
            carrier_name: case.carrier_name.clone(),
            shipment_id: case.shipment_id.clone(),
            rejection_count: case.rejection_count,
            threshold: ESCALATION_REJECTION_THRESHOLD,
            escalate,
            action,
            reason,
        }
    }

    /// Decisions for every case, in input order
    pub fn triage_all(&self, cases: &[CarrierRejectionCase]) -> Vec<TriageDecision> {
        cases.iter().map(|c| self.triage(c)).collect()
    }
}

/// Look up a carrier case by carrier id
pub fn find_case<'a>(
    cases: &'a [CarrierRejectionCase],
    carrier_id: &str,
) -> TenderingResult<&'a CarrierRejectionCase> {
    cases
        .iter()
        .find(|c| c.carrier_id.eq_ignore_ascii_case(carrier_id.trim()))
        .ok_or_else(|| TenderingError::unknown_carrier(carrier_id))
}
