//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the catalog.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (generation, rendering, placement logic of a consumer).
//!
//! # Grid Conventions
//!
//! - **x** grows to the right, **y** grows downward when rendered
//! - Occupied squares of a generated shape are always non-negative
//! - Blocked (candidate) cells may sit at `x = -1` or `y = -1`
//!
//! # Rank Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SEED_RANK` | 1 | Rank of the single-square seed |
//! | `SEED_ID` | 0 | Identifier of the seed shape |
//! | `DEFAULT_MAX_RANK` | 5 | Generation stops after pentominoes |
//! | `MAX_SUPPORTED_RANK` | 10 | Upper bound accepted by the generator config |
//!
//! # Examples
//!
//! ```
//! use polyomino_types::{Coord, SquareSet, Transform, DEFAULT_MAX_RANK};
//!
//! let squares: SquareSet = [Coord::new(0, 0), Coord::new(1, 0)].into_iter().collect();
//! assert_eq!(squares.len(), 2);
//!
//! // Parse a transform (case-insensitive)
//! let t = Transform::from_str("rotate90").unwrap();
//! assert_eq!(t, Transform::Rotate90);
//!
//! assert_eq!(Transform::ALL.len(), 7);
//! assert_eq!(DEFAULT_MAX_RANK, 5);
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// Identifier assigned to an expansion event (shared by transform siblings)
pub type ShapeId = u32;

/// Number of squares in a shape
pub type Rank = u32;

/// Rank of the seed shape (a single square at the origin)
pub const SEED_RANK: Rank = 1;

/// Identifier of the seed shape
pub const SEED_ID: ShapeId = 0;

/// Default maximum rank (pentominoes)
pub const DEFAULT_MAX_RANK: Rank = 5;

/// Largest maximum rank accepted by the generator configuration
pub const MAX_SUPPORTED_RANK: Rank = 10;

/// Canonical free polyomino counts, indexed by `rank - 1`.
pub const FREE_POLYOMINO_COUNTS: [usize; 10] = [1, 1, 2, 5, 12, 35, 108, 369, 1285, 4655];

/// Canonical fixed polyomino counts, indexed by `rank - 1`.
pub const FIXED_POLYOMINO_COUNTS: [usize; 10] =
    [1, 2, 6, 19, 63, 216, 760, 2725, 9910, 36446];

/// A cell position on the integer grid
///
/// Ordered by `x` first, then `y`, so square sets iterate column by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent cells: right, left, down, up.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyomino_types::Coord;
    ///
    /// let n = Coord::ORIGIN.neighbors();
    /// assert!(n.contains(&Coord::new(-1, 0)));
    /// assert!(n.contains(&Coord::new(0, 1)));
    /// ```
    pub fn neighbors(self) -> [Coord; 4] {
        [
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x, self.y + 1),
            Coord::new(self.x, self.y - 1),
        ]
    }

    /// Translate by `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Coord::new(self.x + dx, self.y + dy)
    }

    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Set of occupied (or blocked) cells
///
/// A `BTreeSet` keeps equality and iteration order deterministic.
pub type SquareSet = BTreeSet<Coord>;

/// The seven non-identity symmetries of the square
///
/// Together with the identity they form the dihedral group of order 8:
/// - **Rotate90/180/270**: counter-clockwise rotations
/// - **HorizontalMirror**: flip about the horizontal axis (top <-> bottom)
/// - **VerticalMirror**: flip about the vertical axis (left <-> right)
/// - **UpperLeftSwap**: reflect across the diagonal through the upper-left corner
/// - **BottomRightSwap**: reflect across the diagonal through the bottom-right corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    Rotate90,
    Rotate180,
    Rotate270,
    HorizontalMirror,
    VerticalMirror,
    UpperLeftSwap,
    BottomRightSwap,
}

impl Transform {
    /// All transforms, in the order the generator applies them
    pub const ALL: [Transform; 7] = [
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::HorizontalMirror,
        Transform::VerticalMirror,
        Transform::UpperLeftSwap,
        Transform::BottomRightSwap,
    ];

    /// Parse transform from string (case-insensitive)
    ///
    /// Accepts the full name or the short degree form for rotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyomino_types::Transform;
    ///
    /// assert_eq!(Transform::from_str("rotate180"), Some(Transform::Rotate180));
    /// assert_eq!(Transform::from_str("r270"), Some(Transform::Rotate270));
    /// assert_eq!(Transform::from_str("hMirror"), Some(Transform::HorizontalMirror));
    /// assert_eq!(Transform::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate90" | "r90" => Some(Transform::Rotate90),
            "rotate180" | "r180" => Some(Transform::Rotate180),
            "rotate270" | "r270" => Some(Transform::Rotate270),
            "hmirror" | "horizontalmirror" => Some(Transform::HorizontalMirror),
            "vmirror" | "verticalmirror" => Some(Transform::VerticalMirror),
            "ulswap" | "upperleftswap" => Some(Transform::UpperLeftSwap),
            "brswap" | "bottomrightswap" => Some(Transform::BottomRightSwap),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Transform::Rotate90 => "rotate90",
            Transform::Rotate180 => "rotate180",
            Transform::Rotate270 => "rotate270",
            Transform::HorizontalMirror => "hMirror",
            Transform::VerticalMirror => "vMirror",
            Transform::UpperLeftSwap => "ulSwap",
            Transform::BottomRightSwap => "brSwap",
        }
    }

    /// The transform that undoes this one
    ///
    /// Rotations by 90 and 270 invert each other; every other transform is
    /// its own inverse.
    pub fn inverse(&self) -> Self {
        match self {
            Transform::Rotate90 => Transform::Rotate270,
            Transform::Rotate270 => Transform::Rotate90,
            other => *other,
        }
    }

    /// Whether the transform changes handedness
    pub fn is_reflection(&self) -> bool {
        !matches!(
            self,
            Transform::Rotate90 | Transform::Rotate180 | Transform::Rotate270
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
