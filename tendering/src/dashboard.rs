//! Dashboard snapshot — KPI tiles, optimality per row and the escalation list
//!
//! Runs the policy evaluator and escalation triage side by side over the same
//! board. The two never see each other's output.

use crate::escalation::{CarrierRejectionCase, EscalationTriage, TriageDecision};
use crate::policy::{AssignmentCriterion, AssignmentPolicyEvaluator, ShipmentAssessment};
use crate::shipment::{ShipmentRecord, ShipmentStatus};
use serde::{Deserialize, Serialize};

/// Shipment counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub accepted: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl StatusSummary {
    pub fn from_shipments(shipments: &[ShipmentRecord]) -> Self {
        shipments.iter().fold(Self::default(), |mut acc, s| {
            acc.total += 1;
            match s.status {
                ShipmentStatus::Accepted => acc.accepted += 1,
                ShipmentStatus::Pending => acc.pending += 1,
                ShipmentStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    /// Share of shipments accepted, 0.0 for an empty board
    pub fn acceptance_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.accepted as f64 / self.total as f64
        }
    }
}

/// Everything the tendering board shows for one criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub criterion: AssignmentCriterion,
    pub summary: StatusSummary,
    pub assessments: Vec<ShipmentAssessment>,
    pub optimal_count: usize,
    /// Only the cases that need a human operator
    pub escalations: Vec<TriageDecision>,
}

impl DashboardSnapshot {
    pub fn build(
        criterion: AssignmentCriterion,
        shipments: &[ShipmentRecord],
        cases: &[CarrierRejectionCase],
    ) -> Self {
        let assessments = AssignmentPolicyEvaluator::new(criterion).assess(shipments);
        let optimal_count = assessments.iter().filter(|a| a.optimal).count();

        let triage = EscalationTriage::new();
        let escalations = triage
            .escalation_set(cases)
            .into_iter()
            .map(|c| triage.triage(c))
            .collect();

        Self {
            criterion,
            summary: StatusSummary::from_shipments(shipments),
            assessments,
            optimal_count,
            escalations,
        }
    }
}
