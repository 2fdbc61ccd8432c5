//! Generated rows of quantized levels.

use crate::radix::MixedRadix;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// Pareto relationship between two level tuples (lower levels are better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Better or equal in every column, strictly better in at least one
    Dominates,
    /// The other tuple dominates this one
    DominatedBy,
    /// Identical level vectors
    Equal,
    /// Each tuple is better in some column
    Incomparable,
}

/// One row of a synthetic relation.
///
/// The level vector is owned by the tuple; the maximum levels and the
/// mixed-radix multipliers are shared, read-only, with the generator that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTuple {
    id: u64,
    levels: Vec<u32>,
    values: Vec<Value>,
    max_values: Arc<[u32]>,
    multipliers: Arc<[u64]>,
}

impl LevelTuple {
    /// Build a tuple from an in-bounds level vector.
    pub fn new(levels: Vec<u32>, radix: &MixedRadix) -> Self {
        let id = radix.encode(&levels);
        let values = levels.iter().map(|&level| Value::from(level)).collect();
        Self {
            id,
            levels,
            values,
            max_values: Arc::clone(radix.max_values()),
            multipliers: Arc::clone(radix.multipliers()),
        }
    }

    /// Unique id of the level vector within the relation's level space.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn level(&self, column: usize) -> Option<u32> {
        self.levels.get(column).copied()
    }

    /// The levels as generic values, parallel to [`LevelTuple::levels`].
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn max_values(&self) -> &Arc<[u32]> {
        &self.max_values
    }

    pub fn multipliers(&self) -> &Arc<[u64]> {
        &self.multipliers
    }

    pub fn column_count(&self) -> usize {
        self.levels.len()
    }

    /// Compare two tuples of the same relation under Pareto order.
    pub fn compare(&self, other: &LevelTuple) -> Dominance {
        let mut better = false;
        let mut worse = false;
        for (a, b) in self.levels.iter().zip(&other.levels) {
            match a.cmp(b) {
                Ordering::Less => better = true,
                Ordering::Greater => worse = true,
                Ordering::Equal => {}
            }
            if better && worse {
                return Dominance::Incomparable;
            }
        }
        match (better, worse) {
            (true, false) => Dominance::Dominates,
            (false, true) => Dominance::DominatedBy,
            _ => Dominance::Equal,
        }
    }

    pub fn dominates(&self, other: &LevelTuple) -> bool {
        self.compare(other) == Dominance::Dominates
    }
}

impl Serialize for LevelTuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.levels.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (i, level) in self.levels.iter().enumerate() {
            map.serialize_entry(&format!("col{i}"), level)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(levels: &[u32]) -> LevelTuple {
        let radix = MixedRadix::new(&[9, 9, 9]).unwrap();
        LevelTuple::new(levels.to_vec(), &radix)
    }

    #[test]
    fn test_new_tuple() {
        let t = tuple(&[1, 2, 3]);
        assert_eq!(t.id(), 123);
        assert_eq!(t.levels(), &[1, 2, 3]);
        assert_eq!(t.values(), &[Value::from(1), Value::from(2), Value::from(3)]);
        assert_eq!(t.level(2), Some(3));
        assert_eq!(t.level(3), None);
        assert_eq!(t.column_count(), 3);
        assert_eq!(&**t.max_values(), &[9, 9, 9]);
        assert_eq!(&**t.multipliers(), &[100, 10, 1]);
    }

    #[test]
    fn test_shared_backing_arrays() {
        let radix = MixedRadix::new(&[4, 4]).unwrap();
        let a = LevelTuple::new(vec![0, 1], &radix);
        let b = LevelTuple::new(vec![2, 3], &radix);
        assert!(Arc::ptr_eq(a.max_values(), b.max_values()));
        assert!(Arc::ptr_eq(a.multipliers(), b.multipliers()));
    }

    #[test]
    fn test_compare() {
        assert_eq!(tuple(&[1, 1, 1]).compare(&tuple(&[1, 2, 1])), Dominance::Dominates);
        assert_eq!(tuple(&[3, 2, 1]).compare(&tuple(&[1, 2, 1])), Dominance::DominatedBy);
        assert_eq!(tuple(&[1, 2, 3]).compare(&tuple(&[1, 2, 3])), Dominance::Equal);
        assert_eq!(tuple(&[0, 5, 1]).compare(&tuple(&[1, 2, 1])), Dominance::Incomparable);
        assert!(tuple(&[0, 0, 0]).dominates(&tuple(&[0, 0, 1])));
        assert!(!tuple(&[0, 0, 1]).dominates(&tuple(&[0, 0, 1])));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&tuple(&[4, 0, 7])).unwrap();
        assert_eq!(json, r#"{"id":407,"col0":4,"col1":0,"col2":7}"#);
    }
}
