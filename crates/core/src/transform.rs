//! Transform module - the seven symmetries of a shape
//!
//! Each transform maps the occupied squares of a shape into a new square set.
//! Rather than rotating around the origin and re-normalizing, the image is
//! corrected against the shape's bounding extents (`w = max x`, `h = max y`),
//! so an anchored shape always maps to an anchored, non-negative square set:
//!
//! | Transform | (x, y) maps to |
//! |-----------|----------------|
//! | Rotate90 | (h - y, x) |
//! | Rotate180 | (w - x, h - y) |
//! | Rotate270 | (y, w - x) |
//! | HorizontalMirror | (x, h - y) |
//! | VerticalMirror | (w - x, y) |
//! | UpperLeftSwap | (y, x) |
//! | BottomRightSwap | (h - y, w - x) |

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Coord, SquareSet, Transform};

/// Rotate 90° counter-clockwise
pub fn rotate_90(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, _w, h| Coord::new(h - c.y, c.x))
}

/// Rotate 180°
pub fn rotate_180(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, w, h| Coord::new(w - c.x, h - c.y))
}

/// Rotate 270° counter-clockwise (90° clockwise)
pub fn rotate_270(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, w, _h| Coord::new(c.y, w - c.x))
}

/// Mirror about the horizontal axis (top and bottom swap)
pub fn horizontal_mirror(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, _w, h| Coord::new(c.x, h - c.y))
}

/// Mirror about the vertical axis (left and right swap)
pub fn vertical_mirror(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, w, _h| Coord::new(w - c.x, c.y))
}

/// Reflect across the diagonal through the upper-left corner
pub fn upper_left_swap(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, _w, _h| Coord::new(c.y, c.x))
}

/// Reflect across the diagonal through the bottom-right corner
pub fn bottom_right_swap(shape: &Shape) -> SquareSet {
    map_squares(shape, |c, w, h| Coord::new(h - c.y, w - c.x))
}

/// Apply a transform by tag
pub fn apply(transform: Transform, shape: &Shape) -> SquareSet {
    match transform {
        Transform::Rotate90 => rotate_90(shape),
        Transform::Rotate180 => rotate_180(shape),
        Transform::Rotate270 => rotate_270(shape),
        Transform::HorizontalMirror => horizontal_mirror(shape),
        Transform::VerticalMirror => vertical_mirror(shape),
        Transform::UpperLeftSwap => upper_left_swap(shape),
        Transform::BottomRightSwap => bottom_right_swap(shape),
    }
}

/// Images of the shape under all seven transforms, in [`Transform::ALL`] order
pub fn images(shape: &Shape) -> ArrayVec<(Transform, SquareSet), 7> {
    Transform::ALL
        .iter()
        .map(|&t| (t, apply(t, shape)))
        .collect()
}

/// Images that differ from the shape itself and from each other
///
/// A shape with no symmetry yields seven; the square yields none.
pub fn distinct_images(shape: &Shape) -> ArrayVec<SquareSet, 7> {
    let mut out: ArrayVec<SquareSet, 7> = ArrayVec::new();
    for (_, image) in images(shape) {
        if &image != shape.squares() && !out.contains(&image) {
            out.push(image);
        }
    }
    out
}

/// Number of distinct orientations (1, 2, 4 or 8)
pub fn orientation_count(shape: &Shape) -> usize {
    distinct_images(shape).len() + 1
}

/// Translate a square set so its bounding box touches zero on both axes
pub fn normalize(squares: &SquareSet) -> SquareSet {
    let dx = squares.iter().map(|c| c.x).min().unwrap_or(0);
    let dy = squares.iter().map(|c| c.y).min().unwrap_or(0);
    squares.iter().map(|c| c.offset(-dx, -dy)).collect()
}

fn map_squares(shape: &Shape, f: impl Fn(Coord, i32, i32) -> Coord) -> SquareSet {
    let max = shape.max_corner();
    shape.squares().iter().map(|&c| f(c, max.x, max.y)).collect()
}
