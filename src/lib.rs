//! skyline-datagen library
//!
//! Harness around the relation generator: argument handling, command
//! handlers and JSONL/CSV writers for synthetic skyline benchmark relations.
//!
//! # Features
//!
//! - Four distribution shapes: independent, correlated, anti-correlated, Gaussian
//! - Reproducible: the same config and seed always produce the same rows
//! - Configs from YAML files with command-line overrides
//!
//! # CLI Usage
//!
//! ```bash
//! # 100k anti-correlated rows over 3 columns with levels 0..=9, as JSONL
//! skyline-datagen generate --distribution anti-correlated --columns 3 --max-level 9 \
//!   --rows 100000 --seed 42 --output relation.jsonl
//!
//! # Same relation from a config file, as CSV on stdout
//! skyline-datagen generate --config relation.yaml --format csv
//!
//! # Check the correlation structure
//! skyline-datagen stats --distribution correlated --rows 10000
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{DistributionKind, OffsetPolicyArg, RelationArgs};
pub use error::OutputError;
pub use output::{write_relation, OutputFormat, WriteMetrics};
