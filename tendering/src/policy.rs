//! Assignment Policy — Is a shipment's carrier assignment optimal?
//!
//! The dashboard's policy toggle selects one criterion; every shipment row is
//! then judged against it independently:
//!
//! ```text
//! percentage → optimal iff assignment_percentage >= 90
//! cost       → optimal iff cost <= 2500
//! ```
//!
//! Both thresholds are fixed business rules, not tunables.

use crate::error::{TenderingError, TenderingResult};
use crate::shipment::ShipmentRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lowest assignment percentage still considered optimal
pub const MIN_OPTIMAL_ASSIGNMENT_PERCENTAGE: u8 = 90;

/// Highest cost (USD) still considered optimal
pub const MAX_OPTIMAL_COST: u32 = 2500;

/// Active policy dimension used to judge assignment quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentCriterion {
    /// Highest assignment percentage wins
    #[default]
    Percentage,
    /// Lowest cost wins
    Cost,
}

impl AssignmentCriterion {
    pub const ALL: [AssignmentCriterion; 2] = [Self::Percentage, Self::Cost];

    /// Dashboard label for the toggle button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Percentage => "Highest Assignment %",
            Self::Cost => "Lowest Cost",
        }
    }
}

impl std::fmt::Display for AssignmentCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Cost => write!(f, "cost"),
        }
    }
}

impl FromStr for AssignmentCriterion {
    type Err = TenderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "cost" => Ok(Self::Cost),
            _ => Err(TenderingError::invalid_criterion(s)),
        }
    }
}

/// Decide whether `shipment`'s current assignment is optimal under `criterion`.
pub fn is_optimal(criterion: AssignmentCriterion, shipment: &ShipmentRecord) -> bool {
    match criterion {
        AssignmentCriterion::Percentage => {
            shipment.assignment_percentage >= MIN_OPTIMAL_ASSIGNMENT_PERCENTAGE
        }
        AssignmentCriterion::Cost => shipment.cost <= MAX_OPTIMAL_COST,
    }
}

/// Fail-fast variant for untyped callers: unknown criteria are an error,
/// never a silent default.
pub fn evaluate_str(criterion: &str, shipment: &ShipmentRecord) -> TenderingResult<bool> {
    let criterion: AssignmentCriterion = criterion.parse()?;
    Ok(is_optimal(criterion, shipment))
}

/// Per-row result of applying the active criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentAssessment {
    pub shipment: ShipmentRecord,
    pub criterion: AssignmentCriterion,
    pub optimal: bool,
    /// Why the verdict came out the way it did
    pub reason: String,
}

/// Evaluator bound to the criterion currently selected on the dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentPolicyEvaluator {
    criterion: AssignmentCriterion,
}

impl AssignmentPolicyEvaluator {
    pub fn new(criterion: AssignmentCriterion) -> Self {
        Self { criterion }
    }

    /// Build from criterion text, failing on anything unrecognised
    pub fn parse(criterion: &str) -> TenderingResult<Self> {
        Ok(Self::new(criterion.parse()?))
    }

    pub fn criterion(&self) -> AssignmentCriterion {
        self.criterion
    }

    pub fn is_optimal(&self, shipment: &ShipmentRecord) -> bool {
        is_optimal(self.criterion, shipment)
    }

    /// Judge a single row and explain the verdict
    pub fn assess_one(&self, shipment: &ShipmentRecord) -> ShipmentAssessment {
        let optimal = self.is_optimal(shipment);
        let reason = match self.criterion {
            AssignmentCriterion::Percentage => format!(
                "assignment {}% {} {}%",
                shipment.assignment_percentage,
                if optimal { ">=" } else { "<" },
                MIN_OPTIMAL_ASSIGNMENT_PERCENTAGE
            ),
            AssignmentCriterion::Cost => format!(
                "cost ${} {} ${}",
                shipment.cost,
                if optimal { "<=" } else { ">" },
                MAX_OPTIMAL_COST
            ),
        };
        ShipmentAssessment {
            shipment: shipment.clone(),
            criterion: self.criterion,
            optimal,
            reason,
        }
    }

    /// Apply the criterion to every row independently, preserving row order
    pub fn assess(&self, shipments: &[ShipmentRecord]) -> Vec<ShipmentAssessment> {
        let assessments: Vec<ShipmentAssessment> =
            shipments.iter().map(|s| self.assess_one(s)).collect();
        tracing::debug!(
            criterion = %self.criterion,
            rows = assessments.len(),
            optimal = assessments.iter().filter(|a| a.optimal).count(),
            "Assessed shipment assignments"
        );
        assessments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::ShipmentStatus;
    use chrono::NaiveDate;

    fn shipment(cost: u32, pct: u8) -> ShipmentRecord {
        ShipmentRecord {
            id: format!("SH-{cost}-{pct}"),
            delivery_date: NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
            equipment_type: "48ft Reefer".to_string(),
            loading_hours: 3.0,
            carrier_id: "C-8932".to_string(),
            carrier_name: "Cold Chain Logistics".to_string(),
            cost,
            assignment_percentage: pct,
            status: ShipmentStatus::Pending,
        }
    }

    #[test]
    fn test_percentage_boundary() {
        assert!(is_optimal(AssignmentCriterion::Percentage, &shipment(9999, 90)));
        assert!(is_optimal(AssignmentCriterion::Percentage, &shipment(9999, 100)));
        assert!(!is_optimal(AssignmentCriterion::Percentage, &shipment(1, 89)));
    }

    #[test]
    fn test_cost_boundary() {
        assert!(is_optimal(AssignmentCriterion::Cost, &shipment(2500, 0)));
        assert!(is_optimal(AssignmentCriterion::Cost, &shipment(1, 0)));
        assert!(!is_optimal(AssignmentCriterion::Cost, &shipment(2501, 100)));
    }

    #[test]
    fn test_parse_criterion() {
        assert_eq!(
            "percentage".parse::<AssignmentCriterion>().unwrap(),
            AssignmentCriterion::Percentage
        );
        assert_eq!(
            " COST ".parse::<AssignmentCriterion>().unwrap(),
            AssignmentCriterion::Cost
        );
        let err = "fastest".parse::<AssignmentCriterion>().unwrap_err();
        assert!(
            matches!(err, TenderingError::InvalidCriterion { ref value } if value == "fastest")
        );
    }

    #[test]
    fn test_evaluate_str_fails_fast() {
        let s = shipment(2450, 92);
        assert!(evaluate_str("cost", &s).unwrap());
        assert!(evaluate_str("", &s).is_err());
        assert!(AssignmentPolicyEvaluator::parse("speed").is_err());
    }

    #[test]
    fn test_default_criterion_is_percentage() {
        assert_eq!(
            AssignmentPolicyEvaluator::default().criterion(),
            AssignmentCriterion::Percentage
        );
    }

    #[test]
    fn test_assess_reason_text() {
        let evaluator = AssignmentPolicyEvaluator::new(AssignmentCriterion::Cost);
        let a = evaluator.assess_one(&shipment(3200, 88));
        assert!(!a.optimal);
        assert_eq!(a.reason, "cost $3200 > $2500");

        let evaluator = AssignmentPolicyEvaluator::new(AssignmentCriterion::Percentage);
        let a = evaluator.assess_one(&shipment(3200, 92));
        assert!(a.optimal);
        assert_eq!(a.reason, "assignment 92% >= 90%");
    }

    #[test]
    fn test_assess_preserves_order() {
        let rows = vec![shipment(100, 10), shipment(200, 95), shipment(3000, 50)];
        let evaluator = AssignmentPolicyEvaluator::new(AssignmentCriterion::Percentage);
        let out = evaluator.assess(&rows);
        let ids: Vec<&str> = out.iter().map(|a| a.shipment.id.as_str()).collect();
        assert_eq!(ids, vec!["SH-100-10", "SH-200-95", "SH-3000-50"]);
        assert_eq!(
            out.iter().map(|a| a.optimal).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_criterion_serde() {
        let json = serde_json::to_string(&AssignmentCriterion::Cost).unwrap();
        assert_eq!(json, "\"cost\"");
    }
}
