//! `u-qubo`: generate an instance, anneal its QUBO, print the report.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_qubo::config::RunConfig;
use u_qubo::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "u-qubo")]
#[command(about = "Knapsack with category and taboo rules, solved as a QUBO by simulated annealing", long_about = None)]
struct Cli {
    /// Path to a TOML run configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Instance seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of items
    #[arg(long)]
    items: Option<usize>,

    /// Mass ceiling
    #[arg(long)]
    capacity: Option<i64>,

    /// Number of annealing reads
    #[arg(long)]
    reads: Option<usize>,

    /// Annealer seed
    #[arg(long)]
    sampler_seed: Option<u64>,

    /// Use the penalties from the configuration instead of calibrating
    #[arg(long)]
    manual_penalties: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log debug events
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.instance.seed = seed;
        }
        if let Some(items) = self.items {
            config.instance.num_items = items;
        }
        if let Some(capacity) = self.capacity {
            config.model.capacity = capacity;
        }
        if let Some(reads) = self.reads {
            config.sampler.num_reads = reads;
        }
        if let Some(seed) = self.sampler_seed {
            config.sampler.seed = Some(seed);
        }
        if self.manual_penalties {
            config = config.with_manual_penalties();
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "u_qubo=debug" } else { "u_qubo=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.run_config()?;
    let outcome = Pipeline::annealing(config)
        .run()
        .context("run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        println!("{}", outcome.report);
    }
    Ok(())
}
