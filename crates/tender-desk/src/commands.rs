//! Subcommand execution
//!
//! Resolves configuration (file → environment → flags), loads the board and
//! writes the requested panel to the given writer.

use crate::cli::{Cli, Command};
use crate::render;
use anyhow::{Context, Result};
use std::io::Write;
use tendering::{
    feed, find_case, sample, AssignmentCriterion, AssignmentPolicyEvaluator,
    CarrierRejectionCase, DashboardSnapshot, EscalationTriage, ShipmentRecord, TenderingConfig,
};
use tracing::{debug, info};

/// Shipments and carrier cases the desk works on
#[derive(Debug, Clone)]
pub struct Board {
    pub shipments: Vec<ShipmentRecord>,
    pub cases: Vec<CarrierRejectionCase>,
}

impl Board {
    /// Load feeds named in the config, falling back to the built-in sample
    pub fn load(config: &TenderingConfig) -> Result<Self> {
        let shipments = match &config.shipments_path {
            Some(path) => feed::load_shipments(path)
                .with_context(|| format!("Failed to load shipment feed {}", path.display()))?,
            None => {
                debug!("No shipment feed configured, using sample board");
                sample::shipments().context("Failed to parse built-in sample shipments")?
            }
        };
        let cases = match &config.carriers_path {
            Some(path) => feed::load_cases(path)
                .with_context(|| format!("Failed to load carrier log {}", path.display()))?,
            None => sample::carrier_cases().context("Failed to parse built-in sample carriers")?,
        };
        Ok(Self { shipments, cases })
    }
}

/// Merge config file, environment and command-line flags
pub fn resolve_config(cli: &Cli) -> Result<TenderingConfig> {
    let mut config = match &cli.config {
        Some(path) => TenderingConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TenderingConfig::default(),
    };
    config
        .apply_env()
        .context("Invalid TENDERING_* environment override")?;

    if let Some(path) = &cli.shipments {
        config.shipments_path = Some(path.clone());
    }
    if let Some(path) = &cli.carriers {
        config.carriers_path = Some(path.clone());
    }
    Ok(config)
}

fn pick_criterion(flag: Option<&str>, config: &TenderingConfig) -> Result<AssignmentCriterion> {
    match flag {
        Some(raw) => Ok(raw.parse::<AssignmentCriterion>()?),
        None => Ok(config.criterion),
    }
}

/// Run the parsed command against an already-resolved config
pub fn run<W: Write>(cli: &Cli, config: &TenderingConfig, out: &mut W) -> Result<()> {
    let board = Board::load(config)?;
    info!(
        shipments = board.shipments.len(),
        carriers = board.cases.len(),
        "Board loaded"
    );

    let triage = EscalationTriage::new();

    match &cli.command {
        Command::Shipments { criterion } => {
            let criterion = pick_criterion(criterion.as_deref(), config)?;
            let assessments = AssignmentPolicyEvaluator::new(criterion).assess(&board.shipments);
            if cli.json {
                serde_json::to_writer_pretty(&mut *out, &assessments)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::format_shipments(criterion, &assessments))?;
            }
        }
        Command::Escalations => {
            let decisions: Vec<_> = triage
                .escalation_set(&board.cases)
                .into_iter()
                .map(|c| triage.triage(c))
                .collect();
            if cli.json {
                serde_json::to_writer_pretty(&mut *out, &decisions)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::format_escalations(&decisions))?;
            }
        }
        Command::Timeline { carrier_id } => {
            let case = find_case(&board.cases, carrier_id)?;
            if cli.json {
                serde_json::to_writer_pretty(&mut *out, triage.timeline(case))?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::format_timeline(case))?;
            }
        }
        Command::Summary { criterion } => {
            let criterion = pick_criterion(criterion.as_deref(), config)?;
            let snapshot = DashboardSnapshot::build(criterion, &board.shipments, &board.cases);
            if cli.json {
                serde_json::to_writer_pretty(&mut *out, &snapshot)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::format_summary(&snapshot))?;
            }
        }
    }

    Ok(())
}
