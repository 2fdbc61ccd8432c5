//! Command-line interface for skyline-datagen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Independent relation, defaults (2 columns, levels 0..=10, 1000 rows)
//! skyline-datagen generate
//!
//! # In-memory anti-correlated relation skipping the first 500 rows
//! skyline-datagen generate \
//!   --distribution anti-correlated \
//!   --max-values 9,9,4 \
//!   --rows 10000 --offset 500 --seed 7 --in-memory \
//!   --format csv --output relation.csv
//! ```
//!
//! ## Inspect
//! ```bash
//! skyline-datagen stats --config relation.yaml
//! skyline-datagen show-config --config relation.yaml --rows 50
//! ```

use clap::{Parser, Subcommand};
use skyline_datagen::commands::{run_generate, run_show_config, run_stats};
use skyline_datagen::{OutputFormat, RelationArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyline-datagen")]
#[command(about = "Generate reproducible synthetic relations for skyline query benchmarks")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a relation and write it as JSONL or CSV
    Generate {
        #[command(flatten)]
        relation: RelationArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print per-column mean levels and pairwise correlations as JSON
    Stats {
        #[command(flatten)]
        relation: RelationArgs,
    },

    /// Print the effective relation config as YAML
    ShowConfig {
        #[command(flatten)]
        relation: RelationArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so generated rows on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            relation,
            format,
            output,
        } => {
            run_generate(&relation, format, output.as_deref())?;
        }
        Commands::Stats { relation } => {
            let summary = run_stats(&relation)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::ShowConfig { relation } => {
            print!("{}", run_show_config(&relation)?);
        }
    }

    Ok(())
}
