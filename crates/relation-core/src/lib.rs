//! Core types for synthetic skyline benchmark relations.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line harness:
//!
//! - [`RelationConfig`] - Generator parameters, loadable from YAML
//! - [`Distribution`] - The statistical shape of the generated columns
//! - [`MixedRadix`] - Encoder from level vectors to dense tuple ids
//! - [`LevelTuple`] - One generated row of quantized levels
//! - [`RelationMetaData`] - Descriptor of the relation's column bounds
//!
//! # Architecture
//!
//! ```text
//! relation-core (this crate)
//!    │
//!    └─── relation-generator  (samplers, distributions, cursor)
//!              │
//!              └─── skyline-datagen  (CLI harness, JSONL/CSV writers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use relation_core::{Distribution, MixedRadix, RelationConfig};
//!
//! let config = RelationConfig::new(Distribution::Independent, vec![9, 9], 100).with_seed(42);
//! config.validate().unwrap();
//!
//! let radix = MixedRadix::new(&config.max_values).unwrap();
//! assert_eq!(radix.cardinality(), 100);
//! assert_eq!(radix.encode(&[3, 7]), 37);
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod radix;
pub mod tuple;

// Re-exports for convenience
pub use config::{
    ArcCalibration, Distribution, OffsetPolicy, RelationConfig, DEFAULT_CORRELATED_SPREAD,
    DEFAULT_MAXIMUM_LEVEL,
};
pub use error::ConfigError;
pub use metadata::RelationMetaData;
pub use radix::MixedRadix;
pub use tuple::{Dominance, LevelTuple};
