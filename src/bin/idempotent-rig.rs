//! Enumerate the idempotent rig on two generators

use anyhow::Context;
use clap::Parser;
use idempotent_rig::utils::load_json;
use idempotent_rig::{run, RunConfig, TableMode};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "idempotent-rig")]
#[command(about = "Find the elements of the idempotent rig generated by a and b", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file; flags override its fields
    #[arg(short, long, env = "RIG_CONFIG")]
    config: Option<PathBuf>,

    /// Artifact rewritten after every merge
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a JSON run summary here
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Table strategy: materialized or direct
    #[arg(long)]
    table_mode: Option<TableMode>,

    /// Log every N-th class during a defect search (0 disables)
    #[arg(long)]
    progress_every: Option<usize>,

    /// Skip the start-of-run self checks
    #[arg(long)]
    no_diagnostics: bool,

    /// Do not persist the partition after each merge
    #[arg(long)]
    no_checkpoint: bool,

    /// Log level
    #[arg(long, env = "RIG_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "RIG_LOG_JSON")]
    json: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => load_json::<RunConfig>(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.stats.is_some() {
            config.stats = self.stats;
        }
        if let Some(mode) = self.table_mode {
            config.table_mode = mode;
        }
        if let Some(every) = self.progress_every {
            config.progress_every = every;
        }
        if self.no_diagnostics {
            config.diagnostics = false;
        }
        if self.no_checkpoint {
            config.checkpoint = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = cli.into_config()?;
    tracing::info!(
        output = %config.output.display(),
        table_mode = %config.table_mode,
        "starting enumeration"
    );

    let stats = run(&config).context("enumeration aborted")?;
    println!("{}", stats.summary());
    println!("We now have {} equivalence classes", stats.final_classes());
    Ok(())
}
