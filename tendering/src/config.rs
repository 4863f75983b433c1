//! Tendering configuration
//!
//! Loaded from an optional TOML file, then overridden from `TENDERING_*`
//! environment variables. The optimality and escalation thresholds are fixed
//! business rules and deliberately absent here.
//!
//! ```toml
//! criterion = "cost"
//! shipments_path = "feeds/shipments.json"
//! carriers_path = "feeds/carriers.json"
//! ```

use crate::error::{TenderingError, TenderingResult};
use crate::policy::AssignmentCriterion;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Runtime configuration for the tendering desk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenderingConfig {
    /// Criterion applied when none is given on the command line
    #[serde(deserialize_with = "deserialize_criterion")]
    pub criterion: AssignmentCriterion,
    /// Shipment feed; the built-in sample is used when unset
    pub shipments_path: Option<PathBuf>,
    /// Carrier communication log; the built-in sample is used when unset
    pub carriers_path: Option<PathBuf>,
}

fn deserialize_criterion<'de, D>(deserializer: D) -> Result<AssignmentCriterion, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl TenderingConfig {
    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> TenderingResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TenderingError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_paths(path.parent().unwrap_or_else(|| Path::new(".")));
        Ok(config)
    }

    /// Default config with environment overrides applied
    pub fn from_env() -> TenderingResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `TENDERING_*` environment overrides
    pub fn apply_env(&mut self) -> TenderingResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> TenderingResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(criterion) = lookup("TENDERING_CRITERION") {
            self.criterion = criterion.parse()?;
        }
        if let Some(path) = lookup("TENDERING_SHIPMENTS_PATH") {
            self.shipments_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("TENDERING_CARRIERS_PATH") {
            self.carriers_path = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Resolve relative feed paths against the config file's directory
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.shipments_path, &mut self.carriers_path]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
