//! Shape module - an immutable polyomino with its expansion candidates
//!
//! A shape bundles the occupied squares with the "blocked" cells around them:
//! every empty cell sharing an edge with an occupied square. Blocked cells are
//! exactly the positions where one more square can be attached, so they drive
//! the generator's breadth-first expansion.
//!
//! Coordinates: (x, y) with x growing right and y growing down. Occupied
//! squares are non-negative; blocked cells may sit one step outside at -1.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Coord, Rank, ShapeId, SquareSet, SEED_ID};

/// A polyomino as stored in the catalog
///
/// Equality compares the occupied squares only: two entries with the same
/// square set are the same shape regardless of the id they were built with.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    rank: Rank,
    squares: SquareSet,
    blocked: SquareSet,
}

impl Shape {
    /// Build a shape from its id and occupied squares, deriving rank and blocked cells
    pub fn new(id: ShapeId, squares: SquareSet) -> Self {
        debug_assert!(!squares.is_empty(), "a shape needs at least one square");

        let blocked = blocked_cells(&squares);
        Self {
            id,
            rank: squares.len() as Rank,
            squares,
            blocked,
        }
    }

    /// The single square at the origin
    pub fn seed() -> Self {
        Self::new(SEED_ID, SquareSet::from([Coord::ORIGIN]))
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Number of occupied squares
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn squares(&self) -> &SquareSet {
        &self.squares
    }

    /// Empty cells edge-adjacent to the shape
    pub fn blocked(&self) -> &SquareSet {
        &self.blocked
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.squares.contains(&coord)
    }

    /// Smallest x and y over the occupied squares
    pub fn min_corner(&self) -> Coord {
        let x = self.squares.iter().map(|c| c.x).min().unwrap_or(0);
        let y = self.squares.iter().map(|c| c.y).min().unwrap_or(0);
        Coord::new(x, y)
    }

    /// Largest x and y over the occupied squares
    pub fn max_corner(&self) -> Coord {
        let x = self.squares.iter().map(|c| c.x).max().unwrap_or(0);
        let y = self.squares.iter().map(|c| c.y).max().unwrap_or(0);
        Coord::new(x, y)
    }

    /// Bounding box width in cells
    pub fn width(&self) -> u32 {
        (self.max_corner().x - self.min_corner().x + 1) as u32
    }

    /// Bounding box height in cells
    pub fn height(&self) -> u32 {
        (self.max_corner().y - self.min_corner().y + 1) as u32
    }

    /// Whether the bounding box touches zero on both axes
    pub fn is_anchored(&self) -> bool {
        self.min_corner() == Coord::ORIGIN
    }

    /// Check 4-connectivity of the occupied squares
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.squares.iter().next() else {
            return false;
        };

        let mut seen = SquareSet::new();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);

        while let Some(cell) = queue.pop_front() {
            for n in cell.neighbors() {
                if self.squares.contains(&n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        seen.len() == self.squares.len()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Shape {}

/// Draws the shape row by row: `#` occupied, `+` blocked, `.` empty.
///
/// The frame includes the blocked ring, so it starts at -1 on both axes.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = self.min_corner().offset(-1, -1);
        let max = self.max_corner().offset(1, 1);

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let c = Coord::new(x, y);
                let ch = if self.squares.contains(&c) {
                    '#'
                } else if self.blocked.contains(&c) {
                    '+'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            if y < max.y {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn blocked_cells(squares: &SquareSet) -> SquareSet {
    squares
        .iter()
        .flat_map(|c| c.neighbors())
        .filter(|n| !squares.contains(n))
        .collect()
}
