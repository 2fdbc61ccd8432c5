//! Forward-only cursor over a synthetic relation.
//!
//! A cursor either streams rows (one sampler draw per `next_tuple()`) or
//! materializes all rows up front. Materialized cursors support `peek()` and
//! replay exactly the same rows after `reset()`.

use crate::distributions::{RowSampler, Strategy};
use crate::error::{CursorError, GeneratorError};
use crate::quantizer::Quantizer;
use crate::sampler::Sampler;
use relation_core::{LevelTuple, OffsetPolicy, RelationConfig, RelationMetaData};
use tracing::debug;

#[derive(Debug)]
enum CursorState {
    Streaming { position: u64 },
    Materialized {
        buffer: Vec<LevelTuple>,
        position: usize,
    },
}

/// Cursor that produces the rows of one [`RelationConfig`].
///
/// Each cursor owns its sampler; two cursors built from equal configs
/// yield identical rows.
pub struct RelationCursor {
    config: RelationConfig,
    strategy: Strategy,
    quantizer: Quantizer,
    metadata: RelationMetaData,
    sampler: Sampler,
    /// Raw row buffer reused across draws
    scratch: Vec<f64>,
    state: CursorState,
}

impl RelationCursor {
    /// Build a cursor, consume the offset and, in memory mode, generate all
    /// rows.
    pub fn new(config: RelationConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let quantizer = Quantizer::new(&config.max_values)?;
        let metadata = RelationMetaData::new(quantizer.radix());

        debug!(
            "Creating {} relation cursor: {} columns, {} rows, offset {}, seed {}, in_memory {}",
            config.distribution.name(),
            config.columns(),
            config.rows,
            config.offset,
            config.seed,
            config.in_memory
        );

        let mut cursor = Self {
            strategy: Strategy::from(config.distribution),
            sampler: Sampler::from_seed(config.seed),
            scratch: vec![0.0; config.columns()],
            state: CursorState::Streaming { position: 0 },
            quantizer,
            metadata,
            config,
        };
        cursor.initialise()?;
        Ok(cursor)
    }

    /// Seed the sampler, consume the offset and fill the buffer if needed.
    fn initialise(&mut self) -> Result<(), GeneratorError> {
        self.restart_sampler();

        self.state = if self.config.in_memory {
            let rows = self.config.rows;
            let allocation = |source| GeneratorError::Allocation { rows, source };
            // validate() bounds rows by the addressable buffer size
            let len = usize::try_from(rows).unwrap_or(usize::MAX);
            let mut buffer = Vec::new();
            buffer.try_reserve_exact(len).map_err(allocation)?;
            for _ in 0..len {
                buffer.push(self.draw());
            }
            debug!("Materialized {} rows", buffer.len());
            CursorState::Materialized {
                buffer,
                position: 0,
            }
        } else {
            CursorState::Streaming { position: 0 }
        };
        Ok(())
    }

    /// Re-seed the sampler and consume the offset.
    fn restart_sampler(&mut self) {
        self.sampler = Sampler::from_seed(self.config.seed);

        if self.applies_offset() {
            for _ in 0..self.config.offset {
                self.draw();
            }
            debug!("Discarded {} offset rows", self.config.offset);
        }
    }

    fn applies_offset(&self) -> bool {
        !(self.config.in_memory
            && self.config.offset_policy == OffsetPolicy::IgnoreWhenMaterialized)
    }

    /// Generate one row through the strategy and the quantizer.
    fn draw(&mut self) -> LevelTuple {
        self.strategy.sample(&mut self.sampler, &mut self.scratch);
        self.quantizer.quantize(&self.scratch)
    }

    /// No-op; the cursor holds no external resources.
    pub fn open(&mut self) {}

    /// No-op; the cursor holds no external resources.
    pub fn close(&mut self) {}

    pub fn has_next(&self) -> bool {
        self.remaining() > 0
    }

    /// Return the next row.
    ///
    /// Fails with [`CursorError::Exhausted`] once all rows were returned.
    pub fn next_tuple(&mut self) -> Result<LevelTuple, CursorError> {
        match &mut self.state {
            CursorState::Streaming { position } => {
                if *position >= self.config.rows {
                    return Err(CursorError::Exhausted {
                        rows: self.config.rows,
                    });
                }
                *position += 1;
            }
            CursorState::Materialized { buffer, position } => {
                let tuple = buffer.get(*position).cloned().ok_or(CursorError::Exhausted {
                    rows: buffer.len() as u64,
                })?;
                *position += 1;
                return Ok(tuple);
            }
        }
        Ok(self.draw())
    }

    /// Return the next row without advancing. Only materialized cursors
    /// support this.
    pub fn peek(&self) -> Result<&LevelTuple, CursorError> {
        match &self.state {
            CursorState::Streaming { .. } => Err(CursorError::Unsupported { operation: "peek" }),
            CursorState::Materialized { buffer, position } => {
                buffer.get(*position).ok_or(CursorError::Exhausted {
                    rows: buffer.len() as u64,
                })
            }
        }
    }

    /// Rewind to the first row.
    ///
    /// Materialized cursors replay their buffer. Streaming cursors re-seed
    /// and replay the same rows when `reproducible_reset` is set; otherwise
    /// only the row counter is rewound and the sampler keeps going, so the
    /// following rows are new ones.
    pub fn reset(&mut self) {
        if let CursorState::Materialized { position, .. } = &mut self.state {
            *position = 0;
            return;
        }
        if self.config.reproducible_reset {
            debug!("Re-seeding streaming cursor on reset");
            self.restart_sampler();
        }
        self.state = CursorState::Streaming { position: 0 };
    }

    pub fn supports_peek(&self) -> bool {
        matches!(self.state, CursorState::Materialized { .. })
    }

    pub fn supports_reset(&self) -> bool {
        true
    }

    pub fn supports_remove(&self) -> bool {
        false
    }

    pub fn supports_update(&self) -> bool {
        false
    }

    pub fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::Unsupported {
            operation: "remove",
        })
    }

    pub fn update(&mut self, _tuple: LevelTuple) -> Result<(), CursorError> {
        Err(CursorError::Unsupported {
            operation: "update",
        })
    }

    pub fn metadata(&self) -> &RelationMetaData {
        &self.metadata
    }

    /// Copy of the materialized rows; empty for streaming cursors.
    pub fn elements(&self) -> Vec<LevelTuple> {
        match &self.state {
            CursorState::Materialized { buffer, .. } => buffer.clone(),
            CursorState::Streaming { .. } => Vec::new(),
        }
    }

    /// Number of rows returned since construction or the last reset.
    pub fn position(&self) -> u64 {
        match &self.state {
            CursorState::Streaming { position } => *position,
            CursorState::Materialized { position, .. } => *position as u64,
        }
    }

    /// Number of rows still to be returned.
    pub fn remaining(&self) -> u64 {
        match &self.state {
            CursorState::Streaming { position } => self.config.rows.saturating_sub(*position),
            CursorState::Materialized { buffer, position } => {
                buffer.len().saturating_sub(*position) as u64
            }
        }
    }

    pub fn rows(&self) -> u64 {
        self.config.rows
    }

    pub fn config(&self) -> &RelationConfig {
        &self.config
    }
}

impl Iterator for RelationCursor {
    type Item = LevelTuple;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_tuple().ok()
    }

    /// Exact while the remaining row count fits in `usize`; streaming
    /// cursors may hold more rows than that on 32-bit targets.
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
