//! JSONL and CSV writers for generated relations.

use crate::error::OutputError;
use clap::ValueEnum;
use relation_generator::RelationCursor;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for relation writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output format of the `generate` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line: {"id": .., "col0": .., ...}
    #[default]
    Jsonl,
    /// Header `id,col0,...` followed by one record per row
    Csv,
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drain the cursor into `writer` using the given format.
pub fn write_relation<W: Write>(
    cursor: &mut RelationCursor,
    format: OutputFormat,
    writer: W,
) -> Result<WriteMetrics, OutputError> {
    let start_time = Instant::now();
    let mut metrics = match format {
        OutputFormat::Jsonl => write_jsonl(cursor, writer)?,
        OutputFormat::Csv => write_csv(cursor, writer)?,
    };
    metrics.total_duration = start_time.elapsed();

    info!(
        "Wrote {} rows as {:?} in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        format,
        metrics.total_duration,
        metrics.rows_per_second()
    );
    Ok(metrics)
}

fn write_jsonl<W: Write>(
    cursor: &mut RelationCursor,
    writer: W,
) -> Result<WriteMetrics, OutputError> {
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer);
    let mut metrics = WriteMetrics::default();

    while cursor.has_next() {
        let tuple = cursor.next_tuple()?;
        serde_json::to_writer(&mut writer, &tuple)?;
        writeln!(writer)?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    Ok(metrics)
}

fn write_csv<W: Write>(cursor: &mut RelationCursor, writer: W) -> Result<WriteMetrics, OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .buffer_capacity(DEFAULT_BUFFER_SIZE)
        .from_writer(writer);
    let mut metrics = WriteMetrics::default();

    writer.write_record(cursor.metadata().column_names())?;

    while cursor.has_next() {
        let tuple = cursor.next_tuple()?;
        let record = std::iter::once(tuple.id().to_string())
            .chain(tuple.levels().iter().map(u32::to_string));
        writer.write_record(record)?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    Ok(metrics)
}
