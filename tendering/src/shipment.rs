//! Shipment records as they appear in the dashboard table

use crate::error::{TenderingError, TenderingResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tender status of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Carrier accepted the tender
    Accepted,
    /// Waiting on the carrier
    Pending,
    /// Carrier turned the tender down
    Rejected,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Pending => write!(f, "pending"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// One row of the shipment table. Immutable snapshot; no lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Shipment identifier, unique within a feed (e.g. `SH-2024-001`)
    pub id: String,
    pub delivery_date: NaiveDate,
    /// Equipment type, e.g. `53ft Dry Van`
    pub equipment_type: String,
    /// Loading duration in hours
    pub loading_hours: f64,
    pub carrier_id: String,
    pub carrier_name: String,
    /// Cost in whole US dollars, always positive
    pub cost: u32,
    /// Assignment percentage, 0-100
    pub assignment_percentage: u8,
    pub status: ShipmentStatus,
}

impl ShipmentRecord {
    /// Check the data-model constraints the type system cannot express
    pub fn validate(&self) -> TenderingResult<()> {
        if self.id.trim().is_empty() {
            return Err(TenderingError::invalid_record(
                "<empty>",
                "shipment id must not be empty",
            ));
        }
        if self.cost == 0 {
            return Err(TenderingError::invalid_record(&self.id, "cost must be positive"));
        }
        if self.assignment_percentage > 100 {
            return Err(TenderingError::invalid_record(
                &self.id,
                format!(
                    "assignment percentage {} exceeds 100",
                    self.assignment_percentage
                ),
            ));
        }
        if !self.loading_hours.is_finite() || self.loading_hours < 0.0 {
            return Err(TenderingError::invalid_record(
                &self.id,
                format!("loading duration {} is not a valid hour count", self.loading_hours),
            ));
        }
        if self.carrier_id.trim().is_empty() {
            return Err(TenderingError::invalid_record(
                &self.id,
                "carrier id must not be empty",
            ));
        }
        Ok(())
    }

    /// Loading duration as shown in the table, e.g. `2.5 hrs`
    pub fn loading_label(&self) -> String {
        format!("{:.1} hrs", self.loading_hours)
    }

    /// Cost with thousands separator, e.g. `$2,450`
    pub fn cost_label(&self) -> String {
        let digits = self.cost.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        format!("${out}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ShipmentRecord {
        ShipmentRecord {
            id: "SH-TEST-1".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            equipment_type: "53ft Dry Van".to_string(),
            loading_hours: 2.5,
            carrier_id: "C-1247".to_string(),
            carrier_name: "Swift Transport".to_string(),
            cost: 2450,
            assignment_percentage: 92,
            status: ShipmentStatus::Accepted,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_zero_cost_rejected() {
        let mut r = record();
        r.cost = 0;
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("cost must be positive"));
    }

    #[test]
    fn test_percentage_above_100_rejected() {
        let mut r = record();
        r.assignment_percentage = 101;
        assert!(matches!(
            r.validate(),
            Err(TenderingError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_labels() {
        let mut r = record();
        assert_eq!(r.loading_label(), "2.5 hrs");
        assert_eq!(r.cost_label(), "$2,450");
        r.cost = 999;
        assert_eq!(r.cost_label(), "$999");
        r.cost = 1_234_567;
        assert_eq!(r.cost_label(), "$1,234,567");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ShipmentStatus::Rejected).unwrap();
        assert_eq!(json, "\"rejected\"");
        let back: ShipmentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, ShipmentStatus::Pending);
    }
}
