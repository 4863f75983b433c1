//! Human-readable rendering of the tendering board
//!
//! Plain-text equivalents of the dashboard panels. JSON output bypasses this
//! module entirely.

use tendering::{
    AssignmentCriterion, CarrierRejectionCase, DashboardSnapshot, ShipmentAssessment,
    StatusSummary, TriageDecision,
};

// ── Shipment Table ───────────────────────────────────────────────────

/// Shipment table with the per-row optimal indicator.
pub fn format_shipments(
    criterion: AssignmentCriterion,
    assessments: &[ShipmentAssessment],
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "=== Shipments (criterion: {} / {}) ===",
        criterion,
        criterion.label()
    ));
    lines.push(format!(
        "{:<12} {:<10} {:<14} {:>8}  {:<22} {:>8} {:>5}  {:<9} {}",
        "ID", "Delivery", "Equipment", "Loading", "Carrier", "Cost", "Asg%", "Status", "Optimal"
    ));

    for a in assessments {
        let s = &a.shipment;
        let carrier = format!("{} ({})", s.carrier_name, s.carrier_id);
        lines.push(format!(
            "{:<12} {:<10} {:<14} {:>8}  {:<22} {:>8} {:>4}%  {:<9} {}",
            s.id,
            s.delivery_date.to_string(),
            s.equipment_type,
            s.loading_label(),
            carrier,
            s.cost_label(),
            s.assignment_percentage,
            s.status.to_string(),
            if a.optimal { "yes" } else { "no" },
        ));
    }

    if assessments.is_empty() {
        lines.push("  (no shipments)".to_string());
    }

    lines.join("\n")
}

// ── Escalation Panel ─────────────────────────────────────────────────

/// Carriers needing human follow-up.
pub fn format_escalations(decisions: &[TriageDecision]) -> String {
    let mut lines = Vec::new();

    let count = decisions.len();
    lines.push("=== Carrier Escalation Panel ===".to_string());
    lines.push(format!(
        "{} carrier{} need attention",
        count,
        if count == 1 { "" } else { "s" }
    ));

    for d in decisions {
        lines.push(String::new());
        lines.push(format!(
            "  {} ({})  shipment {}  {} rejections",
            d.carrier_name, d.carrier_id, d.shipment_id, d.rejection_count
        ));
        lines.push(format!("    action: {}", d.action));
        lines.push(format!("    reason: {}", d.reason));
    }

    lines.join("\n")
}

// ── Communication Timeline ───────────────────────────────────────────

/// One carrier's contact attempts, oldest first.
pub fn format_timeline(case: &CarrierRejectionCase) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "=== Communication Timeline: {} ({}) ===",
        case.carrier_name, case.carrier_id
    ));
    lines.push(format!(
        "Shipment {}  Rejections: {}",
        case.shipment_id, case.rejection_count
    ));

    for (i, attempt) in case.attempts().iter().enumerate() {
        lines.push(String::new());
        lines.push(format!(
            "  {}. [{}] {}",
            i + 1,
            attempt.channel,
            attempt.timestamp
        ));
        lines.push(format!("     {}", attempt.message));
        if let Some(reason) = &attempt.rejection_reason {
            lines.push(format!("     Rejected: {}", reason));
        }
    }

    if case.attempts().is_empty() {
        lines.push("  (no attempts recorded)".to_string());
    }

    lines.join("\n")
}

// ── KPI Summary ──────────────────────────────────────────────────────

fn format_tiles(summary: &StatusSummary) -> String {
    format!(
        "  Total: {}  Accepted: {}  Pending: {}  Rejected: {}  (acceptance {:.0}%)",
        summary.total,
        summary.accepted,
        summary.pending,
        summary.rejected,
        summary.acceptance_rate() * 100.0
    )
}

/// KPI tiles plus optimal and escalation counts.
pub fn format_summary(snapshot: &DashboardSnapshot) -> String {
    let mut lines = Vec::new();

    lines.push("=== Tendering Board ===".to_string());
    lines.push(format_tiles(&snapshot.summary));
    lines.push(format!(
        "  Optimal under {}: {}/{}",
        snapshot.criterion,
        snapshot.optimal_count,
        snapshot.assessments.len()
    ));
    lines.push(format!(
        "  Carriers needing a human operator: {}",
        snapshot.escalations.len()
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tendering::{sample, AssignmentPolicyEvaluator, EscalationTriage};

    #[test]
    fn test_shipment_table_marks_optimal_rows() {
        let shipments = sample::shipments().unwrap();
        let assessments =
            AssignmentPolicyEvaluator::new(AssignmentCriterion::Cost).assess(&shipments);
        let out = format_shipments(AssignmentCriterion::Cost, &assessments);

        assert!(out.contains("criterion: cost / Lowest Cost"), "{out}");
        let row = out.lines().find(|l| l.starts_with("SH-2024-004")).unwrap();
        assert!(row.ends_with("no"), "{row}");
        assert!(row.contains("$4,500"), "{row}");
        let row = out.lines().find(|l| l.starts_with("SH-2024-001")).unwrap();
        assert!(row.ends_with("yes"), "{row}");
    }

    #[test]
    fn test_escalation_panel_pluralizes() {
        let cases = sample::carrier_cases().unwrap();
        let triage = EscalationTriage::new();
        let decisions: Vec<_> = triage
            .escalation_set(&cases)
            .into_iter()
            .map(|c| triage.triage(c))
            .collect();
        let out = format_escalations(&decisions);
        assert!(out.contains("2 carriers need attention"), "{out}");
        assert!(out.contains("action: assign human operator"), "{out}");

        let out = format_escalations(&decisions[..1]);
        assert!(out.contains("1 carrier need attention"), "{out}");
    }

    #[test]
    fn test_timeline_numbered_in_order() {
        let cases = sample::carrier_cases().unwrap();
        let out = format_timeline(&cases[0]);
        let first = out.find("1. [phone] 2024-10-15 09:30 AM").unwrap();
        let third = out.find("3. [email] 2024-10-15 02:15 PM").unwrap();
        assert!(first < third);
        assert!(out.contains("Rejected: Route not covered"));
    }

    #[test]
    fn test_summary_tiles() {
        let shipments = sample::shipments().unwrap();
        let cases = sample::carrier_cases().unwrap();
        let snap = DashboardSnapshot::build(AssignmentCriterion::Percentage, &shipments, &cases);
        let out = format_summary(&snap);
        assert!(out.contains("Total: 5  Accepted: 2  Pending: 2  Rejected: 1"), "{out}");
        assert!(out.contains("Optimal under percentage: 3/5"), "{out}");
        assert!(out.contains("Carriers needing a human operator: 2"), "{out}");
    }
}
