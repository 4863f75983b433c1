//! Shipment feed and carrier communication log loading
//!
//! Both feeds are JSON arrays. Every record is validated on the way in, and
//! carrier timelines are replayed through `record_attempt` so ordering is
//! checked at the boundary instead of at every caller.

use crate::error::{TenderingError, TenderingResult};
use crate::escalation::CarrierRejectionCase;
use crate::shipment::ShipmentRecord;
use std::collections::HashSet;
use std::path::Path;

/// Parse and validate a shipment feed
pub fn parse_shipments(content: &str) -> TenderingResult<Vec<ShipmentRecord>> {
    let shipments: Vec<ShipmentRecord> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(shipments.len());
    for shipment in &shipments {
        shipment.validate()?;
        if !seen.insert(shipment.id.as_str()) {
            return Err(TenderingError::DuplicateShipment {
                shipment_id: shipment.id.clone(),
            });
        }
    }

    Ok(shipments)
}

/// Parse and validate a carrier communication log
pub fn parse_cases(content: &str) -> TenderingResult<Vec<CarrierRejectionCase>> {
    let cases: Vec<CarrierRejectionCase> = serde_json::from_str(content)?;
    for case in &cases {
        case.validate()?;
    }
    Ok(cases)
}

/// Load a shipment feed from disk
pub fn load_shipments(path: impl AsRef<Path>) -> TenderingResult<Vec<ShipmentRecord>> {
    let path = path.as_ref();
    let shipments = parse_shipments(&read_feed(path)?)?;
    tracing::info!(path = %path.display(), count = shipments.len(), "Loaded shipment feed");
    Ok(shipments)
}

/// Load a carrier communication log from disk
pub fn load_cases(path: impl AsRef<Path>) -> TenderingResult<Vec<CarrierRejectionCase>> {
    let path = path.as_ref();
    let cases = parse_cases(&read_feed(path)?)?;
    tracing::info!(path = %path.display(), count = cases.len(), "Loaded carrier log");
    Ok(cases)
}

fn read_feed(path: &Path) -> TenderingResult<String> {
    if !path.exists() {
        return Err(TenderingError::feed_not_found(path));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SHIPMENT: &str = r#"[{
        "id": "SH-1",
        "delivery_date": "2024-10-15",
        "equipment_type": "53ft Dry Van",
        "loading_hours": 2.5,
        "carrier_id": "C-1247",
        "carrier_name": "Swift Transport",
        "cost": 2450,
        "assignment_percentage": 92,
        "status": "accepted"
    }]"#;

    #[test]
    fn test_parse_single_shipment() {
        let shipments = parse_shipments(ONE_SHIPMENT).unwrap();
        assert_eq!(shipments.len(), 1);
        assert_eq!(shipments[0].delivery_date.to_string(), "2024-10-15");
    }

    #[test]
    fn test_unknown_status_is_json_error() {
        let bad = ONE_SHIPMENT.replace("\"accepted\"", "\"lost\"");
        assert!(matches!(parse_shipments(&bad), Err(TenderingError::Json(_))));
    }

    #[test]
    fn test_percentage_over_byte_range_is_json_error() {
        let bad = ONE_SHIPMENT.replace(
            "\"assignment_percentage\": 92",
            "\"assignment_percentage\": 300",
        );
        assert!(matches!(parse_shipments(&bad), Err(TenderingError::Json(_))));
    }

    #[test]
    fn test_empty_case_list() {
        assert!(parse_cases("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_shipments("/nonexistent/tendering/shipments.json").unwrap_err();
        assert!(matches!(err, TenderingError::FeedNotFound { .. }));
    }
}
