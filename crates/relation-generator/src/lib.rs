//! Seeded generator of synthetic skyline benchmark relations.
//!
//! This crate provides the [`RelationCursor`], which produces deterministic
//! rows of quantized levels whose columns follow an independent, correlated,
//! anti-correlated or Gaussian shape. The same config and seed always yield
//! the same rows, so large relations never need to be stored.
//!
//! # Architecture
//!
//! ```text
//! RelationConfig
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   RelationCursor     │
//! │                      │
//! │  - sampler (StdRng)  │──► Strategy::sample() ──► raw [0,1] values
//! │  - quantizer         │◄── levels + mixed-radix id
//! │  - state             │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!      LevelTuple { id, levels }
//! ```
//!
//! # Example
//!
//! ```rust
//! use relation_core::{Distribution, RelationConfig};
//! use relation_generator::RelationCursor;
//!
//! let config = RelationConfig::new(Distribution::anti_correlated(), vec![9, 9], 3)
//!     .with_seed(42)
//!     .in_memory(true);
//! let mut cursor = RelationCursor::new(config).unwrap();
//!
//! let first = cursor.peek().unwrap().clone();
//! assert_eq!(cursor.next_tuple().unwrap(), first);
//! assert_eq!(cursor.by_ref().count(), 2);
//! ```
//!
//! # Distributions
//!
//! - `independent` - Every column is uniform on `[0, 1)`
//! - `correlated` - Columns jitter around a shared base value
//! - `anti_correlated` - Columns `1..` are drawn from a band that falls as column 0 rises
//! - `gaussian` - `N(0.5, 1/6)` per column, redrawn until inside `[0, 1]`

pub mod cursor;
pub mod distributions;
pub mod error;
pub mod quantizer;
pub mod sampler;
pub mod stats;

// Re-exports for convenience
pub use cursor::RelationCursor;
pub use distributions::{RowSampler, Strategy};
pub use error::{CursorError, GeneratorError};
pub use quantizer::Quantizer;
pub use sampler::Sampler;
pub use stats::{pearson_correlation, RelationStats, StatsAccumulator};
