//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tendering assistant desk: shipment optimality and carrier escalations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file (criterion, feed paths)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shipment feed JSON (overrides config and TENDERING_SHIPMENTS_PATH)
    #[arg(long, global = true)]
    pub shipments: Option<PathBuf>,

    /// Carrier communication log JSON (overrides config and TENDERING_CARRIERS_PATH)
    #[arg(long, global = true)]
    pub carriers: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shipment table with the optimal indicator per row
    Shipments {
        /// `percentage` or `cost`; defaults to the configured criterion
        #[arg(long)]
        criterion: Option<String>,
    },
    /// Carriers with enough rejections to need a human operator
    Escalations,
    /// Communication timeline for one carrier
    Timeline {
        /// Carrier id, e.g. C-6789
        carrier_id: String,
    },
    /// KPI tiles, optimal count and escalation count
    Summary {
        /// `percentage` or `cost`; defaults to the configured criterion
        #[arg(long)]
        criterion: Option<String>,
    },
}
