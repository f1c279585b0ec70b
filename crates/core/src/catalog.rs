//! Catalog module - the generator's result
//!
//! The catalog is a multimap from [`ShapeId`] to shapes. Every entry produced
//! by one expansion event (the new shape plus its distinct transforms) shares
//! that event's id, so `get(id)` returns all orientations of one free
//! polyomino.

use std::collections::btree_map::{Entry, Values};
use std::collections::{BTreeMap, BTreeSet};
use std::iter::Flatten;

use crate::shape::Shape;
use crate::types::{Rank, ShapeId, SquareSet};

/// Entry counts for one rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankStats {
    pub rank: Rank,
    /// Stored shapes, i.e. fixed orientations
    pub entries: usize,
    /// Expansion events, i.e. free shapes
    pub distinct_ids: usize,
}

/// Generated shapes keyed by id
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    entries: BTreeMap<ShapeId, Vec<Shape>>,
    /// Ids present at each rank
    by_rank: BTreeMap<Rank, BTreeSet<ShapeId>>,
    len: usize,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, shape: Shape) {
        self.by_rank
            .entry(shape.rank())
            .or_default()
            .insert(shape.id());
        match self.entries.entry(shape.id()) {
            Entry::Occupied(mut e) => e.get_mut().push(shape),
            Entry::Vacant(e) => {
                e.insert(vec![shape]);
            }
        }
        self.len += 1;
    }

    /// Total number of stored shapes (all orientations)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All shapes sharing `id`, in insertion order; empty if unknown
    pub fn get(&self, id: ShapeId) -> &[Shape] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All shapes ordered by id, then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.entries.values().flatten()
    }

    /// Distinct ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.entries.keys().copied()
    }

    /// Shapes of one rank, ordered by id, then insertion order
    ///
    /// Only the ids indexed under `rank` are visited.
    pub fn of_rank(&self, rank: Rank) -> impl Iterator<Item = &Shape> + '_ {
        self.by_rank
            .get(&rank)
            .into_iter()
            .flatten()
            .flat_map(move |id| self.get(*id))
            .filter(move |s| s.rank() == rank)
    }

    /// Whether some stored shape has exactly these squares
    pub fn contains_squares(&self, squares: &SquareSet) -> bool {
        let rank = squares.len() as Rank;
        self.of_rank(rank).any(|s| s.squares() == squares)
    }

    pub fn max_rank(&self) -> Option<Rank> {
        self.by_rank.keys().next_back().copied()
    }

    /// Ranks present, ascending
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.by_rank.keys().copied()
    }

    /// Per-rank entry and id counts, ascending by rank
    pub fn rank_stats(&self) -> Vec<RankStats> {
        self.by_rank
            .iter()
            .map(|(&rank, ids)| RankStats {
                rank,
                entries: self.of_rank(rank).count(),
                distinct_ids: ids.len(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ShapeCatalog {
    type Item = &'a Shape;
    type IntoIter = Flatten<Values<'a, ShapeId, Vec<Shape>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values().flatten()
    }
}
