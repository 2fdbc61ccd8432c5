//! Command handlers for the CLI.

use crate::args::RelationArgs;
use crate::output::{write_relation, OutputFormat, WriteMetrics};
use anyhow::Context;
use relation_generator::{RelationCursor, StatsAccumulator};
use std::fs::File;
use std::io;
use std::path::Path;

/// Generate the relation and write it to `output` (stdout when `None`).
pub fn run_generate(
    args: &RelationArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<WriteMetrics> {
    let config = args.to_config()?;
    tracing::info!(
        "Generating {} rows of a {}-column {} relation (seed {})",
        config.rows,
        config.columns(),
        config.distribution.name(),
        config.seed
    );
    let mut cursor = RelationCursor::new(config)?;

    let metrics = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_relation(&mut cursor, format, file)?
        }
        None => write_relation(&mut cursor, format, io::stdout().lock())?,
    };
    Ok(metrics)
}

/// Generate the relation and summarise its shape as JSON.
pub fn run_stats(args: &RelationArgs) -> anyhow::Result<serde_json::Value> {
    let config = args.to_config()?;
    let columns = config.columns();
    let distribution = config.distribution.name();
    let cursor = RelationCursor::new(config)?;

    let mut accumulator = StatsAccumulator::new(columns);
    for tuple in cursor {
        accumulator.push(&tuple);
    }
    let stats = accumulator.finish();
    tracing::info!("Summarised {} rows", stats.rows);

    Ok(serde_json::json!({
        "distribution": distribution,
        "rows": stats.rows,
        "means": stats.means,
        "correlations": stats.correlations,
    }))
}

/// Render the effective config (file plus flag overrides) as YAML.
pub fn run_show_config(args: &RelationArgs) -> anyhow::Result<String> {
    let config = args.to_config()?;
    Ok(config.to_yaml()?)
}
