//! Built-in sample dataset
//!
//! The mock tendering board: five shipments and the carrier communication
//! log behind the escalation panel. Used whenever no feed file is supplied.

use crate::error::TenderingResult;
use crate::escalation::CarrierRejectionCase;
use crate::feed;
use crate::shipment::ShipmentRecord;

const SAMPLE_SHIPMENTS: &str = include_str!("../data/sample_shipments.json");
const SAMPLE_CARRIERS: &str = include_str!("../data/sample_carriers.json");

/// Sample shipment table
pub fn shipments() -> TenderingResult<Vec<ShipmentRecord>> {
    feed::parse_shipments(SAMPLE_SHIPMENTS)
}

/// Sample carrier communication log
pub fn carrier_cases() -> TenderingResult<Vec<CarrierRejectionCase>> {
    feed::parse_cases(SAMPLE_CARRIERS)
}
