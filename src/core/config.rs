//! Run configuration

use crate::{RigError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// How products and sums are looked up during the closure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// Build dense MTAB/ATAB first (about 1 GiB, fastest lookups)
    #[default]
    Materialized,
    /// Compute every product and sum from tuples on demand
    Direct,
}

impl FromStr for TableMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "materialized" | "tables" => Ok(TableMode::Materialized),
            "direct" => Ok(TableMode::Direct),
            other => Err(format!("unknown table mode '{}', expected 'materialized' or 'direct'", other)),
        }
    }
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableMode::Materialized => f.write_str("materialized"),
            TableMode::Direct => f.write_str("direct"),
        }
    }
}

/// Settings for one enumeration run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Artifact rewritten after every merge
    pub output: PathBuf,
    /// Optional JSON summary written at the end
    pub stats: Option<PathBuf>,
    /// Table strategy
    pub table_mode: TableMode,
    /// Log the monomial table, bijection check and sample products first
    pub diagnostics: bool,
    /// Persist the partition after each merge
    pub checkpoint: bool,
    /// Log every N-th class during a defect search; 0 disables
    pub progress_every: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output: PathBuf::from("IdempotentRig.txt"),
            stats: None,
            table_mode: TableMode::Materialized,
            diagnostics: true,
            checkpoint: true,
            progress_every: 1,
        }
    }
}

impl RunConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(RigError::InvalidConfig("output path is empty".to_string()));
        }
        if let Some(stats) = &self.stats {
            if stats.as_os_str().is_empty() {
                return Err(RigError::InvalidConfig("stats path is empty".to_string()));
            }
            if *stats == self.output {
                return Err(RigError::InvalidConfig(format!(
                    "stats and output both point at {}",
                    stats.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output, PathBuf::from("IdempotentRig.txt"));
        assert_eq!(config.table_mode, TableMode::Materialized);
    }

    #[test]
    fn test_config_validation() {
        let mut config = RunConfig::default();
        config.output = PathBuf::new();
        assert!(config.validate().is_err());

        config.output = PathBuf::from("out.txt");
        config.stats = Some(PathBuf::from("out.txt"));
        assert!(matches!(config.validate(), Err(RigError::InvalidConfig(_))));

        config.stats = Some(PathBuf::from("stats.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "table_mode": "direct", "progress_every": 50 }"#).unwrap();
        assert_eq!(config.table_mode, TableMode::Direct);
        assert_eq!(config.progress_every, 50);
        assert_eq!(config.output, PathBuf::from("IdempotentRig.txt"));
        assert!(config.checkpoint);
    }

    #[test]
    fn test_table_mode_parsing() {
        assert_eq!("direct".parse::<TableMode>(), Ok(TableMode::Direct));
        assert_eq!("Materialized".parse::<TableMode>(), Ok(TableMode::Materialized));
        assert!("sparse".parse::<TableMode>().is_err());
        assert_eq!(TableMode::Direct.to_string(), "direct");
    }
}
