//! Catalog tests - end-to-end properties of generated catalogs

use std::collections::{BTreeMap, BTreeSet};

use pretty_assertions::assert_eq;

use polyomino_catalog::core::transform::{self, normalize};
use polyomino_catalog::core::{generate, generate_up_to, GeneratorConfig, Shape, ShapeCatalog};
use polyomino_catalog::types::{
    Coord, Rank, ShapeId, SquareSet, Transform, FIXED_POLYOMINO_COUNTS, FREE_POLYOMINO_COUNTS,
};

fn catalog(max_rank: Rank) -> ShapeCatalog {
    generate_up_to(GeneratorConfig::new(max_rank).unwrap())
}

fn set(cells: &[(i32, i32)]) -> SquareSet {
    cells.iter().copied().map(Coord::from).collect()
}

// ============== Counts ==============

#[test]
fn test_pentomino_catalog_counts() {
    let catalog = generate();
    let stats = catalog.rank_stats();

    let distinct: Vec<usize> = stats.iter().map(|s| s.distinct_ids).collect();
    let entries: Vec<usize> = stats.iter().map(|s| s.entries).collect();

    // Free polyominoes: one id per expansion event.
    assert_eq!(distinct, vec![1, 1, 2, 5, 12]);
    // Fixed polyominoes: every orientation stored.
    assert_eq!(entries, vec![1, 2, 6, 19, 63]);
    assert_eq!(catalog.len(), 91);
}

#[test]
fn test_hexomino_counts_match_enumeration() {
    let catalog = catalog(6);
    for s in catalog.rank_stats() {
        let i = (s.rank - 1) as usize;
        assert_eq!(s.distinct_ids, FREE_POLYOMINO_COUNTS[i], "free count at rank {}", s.rank);
        assert_eq!(s.entries, FIXED_POLYOMINO_COUNTS[i], "fixed count at rank {}", s.rank);
    }
}

#[test]
fn test_generation_stops_at_max_rank() {
    for max in 1..=5 {
        assert_eq!(catalog(max).max_rank(), Some(max));
    }
}

// ============== Invariants ==============

#[test]
fn test_seed_is_present_with_id_zero() {
    let catalog = generate();
    let seeds = catalog.get(0);
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].rank(), 1);
    assert_eq!(seeds[0].squares(), &set(&[(0, 0)]));
}

#[test]
fn test_rank_matches_square_count() {
    for shape in &generate() {
        assert_eq!(shape.rank() as usize, shape.squares().len());
    }
}

#[test]
fn test_shapes_are_connected_and_anchored() {
    for shape in &generate() {
        assert!(shape.is_connected(), "disconnected:\n{shape}");
        // Offset-only normalization never leaves a shape away from the origin.
        assert!(shape.is_anchored(), "not anchored:\n{shape}");
        assert!(shape.squares().iter().all(|c| c.is_non_negative()));
    }
}

#[test]
fn test_no_duplicate_square_sets_within_a_rank() {
    let catalog = generate();
    let mut seen: BTreeMap<Rank, BTreeSet<SquareSet>> = BTreeMap::new();
    for shape in &catalog {
        let fresh = seen
            .entry(shape.rank())
            .or_default()
            .insert(shape.squares().clone());
        assert!(fresh, "duplicate shape:\n{shape}");
    }
}

#[test]
fn test_every_extension_is_cataloged() {
    let catalog = generate();
    for shape in catalog.iter().filter(|s| s.rank() < 5) {
        for &cell in shape.blocked() {
            let dx = if cell.x < 0 { -cell.x } else { 0 };
            let dy = if cell.y < 0 { -cell.y } else { 0 };
            let extended: SquareSet = shape
                .squares()
                .iter()
                .copied()
                .chain(std::iter::once(cell))
                .map(|c| c.offset(dx, dy))
                .collect();
            assert!(
                catalog.contains_squares(&extended),
                "lost extension of\n{shape}\nat {cell}"
            );
        }
    }
}

#[test]
fn test_transforms_never_escape_the_catalog() {
    let catalog = generate();
    for shape in &catalog {
        for t in Transform::ALL {
            let image = normalize(&transform::apply(t, shape));
            assert!(
                catalog.contains_squares(&image),
                "{t} of\n{shape}\nmissing"
            );
        }
    }
}

#[test]
fn test_siblings_are_orientations_of_one_shape() {
    let catalog = generate();
    for id in catalog.ids() {
        let siblings = catalog.get(id);
        let first = &siblings[0];

        // The first entry of an id is the expansion result; the rest are its images.
        let mut orbit: BTreeSet<SquareSet> = transform::distinct_images(first).into_iter().collect();
        orbit.insert(first.squares().clone());

        let stored: BTreeSet<SquareSet> = siblings.iter().map(|s| s.squares().clone()).collect();
        assert_eq!(stored, orbit, "id {id}");
        assert_eq!(siblings.len(), transform::orientation_count(first));
    }
}

// ============== Known pieces ==============

#[test]
fn test_known_pentominoes_are_present() {
    let catalog = generate();
    let pieces = [
        // I
        set(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
        // X
        set(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
        // F
        set(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
        // W
        set(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
        // P
        set(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
    ];
    for squares in &pieces {
        assert!(catalog.contains_squares(squares), "missing {squares:?}");
    }
}

#[test]
fn test_x_pentomino_has_a_single_orientation() {
    let catalog = generate();
    let x = set(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
    let id = catalog
        .of_rank(5)
        .find(|s| s.squares() == &x)
        .map(Shape::id)
        .unwrap();
    assert_eq!(catalog.get(id).len(), 1);
}

// ============== Determinism ==============

#[test]
fn test_generation_is_deterministic() {
    let a = generate();
    let b = generate();

    let flatten = |c: &ShapeCatalog| -> Vec<(ShapeId, SquareSet)> {
        c.iter().map(|s| (s.id(), s.squares().clone())).collect()
    };
    assert_eq!(flatten(&a), flatten(&b));
}

#[test]
fn test_smaller_catalog_is_a_prefix() {
    // Ranks are expanded in order, so ids below the cut agree.
    let small = catalog(4);
    let large = generate();
    for shape in &small {
        let same: Vec<&SquareSet> = large.get(shape.id()).iter().map(Shape::squares).collect();
        assert!(same.contains(&shape.squares()));
    }
}
