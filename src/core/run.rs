//! End-to-end enumeration driver

use super::config::{RunConfig, TableMode};
use super::diagnostics::log_diagnostics;
use crate::partition::{ClosureSummary, FixupReport, Partition, PartitionEngine};
use crate::report::{Checkpoint, CheckpointOutcome};
use crate::tables::{DirectAlgebra, Operations, OperationTables};
use crate::utils::{save_json, timing::Timer};
use crate::Result;
use serde::{Serialize, Deserialize};
use tracing::info;

/// Summary of a finished run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Elements partitioned
    pub universe_size: usize,
    /// Classes right after seeding
    pub seeded_classes: usize,
    /// Label fix-up outcome
    pub fixup: FixupReport,
    /// Closure outcome
    pub closure: ClosureSummary,
    /// Checkpoints that went to the console instead of the file
    pub checkpoint_fallbacks: usize,
    /// Seconds spent building tables
    pub table_seconds: f64,
    /// Seconds spent seeding, fixing up and closing
    pub closure_seconds: f64,
}

impl RunStats {
    /// Classes in the final congruence
    pub fn final_classes(&self) -> usize {
        self.closure.final_classes
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Seeded classes: {}\nAfter fix-up: {} ({} passes)\nMerges: {} over {} passes\nFinal classes: {}\nTable time: {:.2}s\nClosure time: {:.2}s",
            self.seeded_classes,
            self.fixup.classes,
            self.fixup.passes,
            self.closure.merges,
            self.closure.passes,
            self.closure.final_classes,
            self.table_seconds,
            self.closure_seconds
        )
    }
}

/// Enumerate the rig as configured
pub fn run(config: &RunConfig) -> Result<RunStats> {
    config.validate()?;
    if config.diagnostics {
        log_diagnostics()?;
    }

    let (_, stats) = match config.table_mode {
        TableMode::Materialized => {
            let timer = Timer::new("table construction");
            let tables = OperationTables::for_rig()?;
            let table_seconds = timer.elapsed();
            drop(timer);
            let (partition, mut stats) = run_with(&tables, config)?;
            stats.table_seconds = table_seconds;
            (partition, stats)
        }
        TableMode::Direct => run_with(DirectAlgebra, config)?,
    };

    if let Some(path) = &config.stats {
        save_json(&stats, path)?;
        info!(path = %path.display(), "run statistics written");
    }
    Ok(stats)
}

/// Seed, fix up and close a partition over `ops`
///
/// The checkpoint is rewritten after every merge and once more at the end.
pub fn run_with<O: Operations>(ops: O, config: &RunConfig) -> Result<(Partition, RunStats)> {
    let timer = Timer::new("congruence closure");
    let mut stats = RunStats {
        universe_size: ops.universe_size(),
        ..RunStats::default()
    };

    let mut engine = PartitionEngine::seed(ops)?.with_progress_every(config.progress_every);
    stats.seeded_classes = engine.partition().class_count();
    stats.fixup = engine.fix_label_membership()?;
    info!(
        classes = stats.fixup.classes,
        elements = engine.partition().universe_size(),
        "validated equivalence class info"
    );

    let mut checkpoint = Checkpoint::new(&config.output);
    let persist = config.checkpoint;
    stats.closure = engine.close(|partition, _event| {
        if persist {
            checkpoint.write(partition);
        }
    })?;

    let partition = engine.into_partition();
    if persist && checkpoint.write(&partition) == CheckpointOutcome::File {
        info!(path = %checkpoint.path().display(), "final partition written");
    }
    stats.checkpoint_fallbacks = checkpoint.fallbacks();
    stats.closure_seconds = timer.elapsed();

    info!(classes = stats.final_classes(), "we now have the final equivalence classes");
    Ok((partition, stats))
}
