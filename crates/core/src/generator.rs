//! Generator module - breadth-first enumeration of polyominoes
//!
//! Starting from the single-square seed, each round extends every shape of the
//! current frontier by one blocked cell. A candidate that is not already known
//! at its rank becomes a new expansion event: it takes the next id and its
//! seven transforms are stored alongside it under the same id. Everything
//! created in a round becomes the next frontier.
//!
//! Uniqueness is checked against a working index bucketed by rank, so a lookup
//! only ever scans shapes of the candidate's size.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::catalog::ShapeCatalog;
use crate::config::GeneratorConfig;
use crate::shape::Shape;
use crate::transform;
use crate::types::{Coord, Rank, ShapeId, SquareSet, Transform, SEED_ID};

/// Single-use catalog builder
///
/// Owns the rank-bucketed working index for the duration of one
/// [`generate`](ShapeGenerator::generate) call.
#[derive(Debug)]
pub struct ShapeGenerator {
    config: GeneratorConfig,
    /// Working index: every stored shape, bucketed by rank
    shapes: BTreeMap<Rank, Vec<Shape>>,
    next_id: ShapeId,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl ShapeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            shapes: BTreeMap::new(),
            next_id: SEED_ID + 1,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Enumerate every shape up to the configured maximum rank
    #[tracing::instrument(level = "debug", skip_all, fields(max_rank = self.config.max_rank()))]
    pub fn generate(mut self) -> ShapeCatalog {
        let max_rank = self.config.max_rank();
        let mut catalog = ShapeCatalog::new();

        let seed = Shape::seed();
        self.store(seed.clone());
        catalog.insert(seed.clone());

        let mut frontier = vec![seed];
        while !frontier.is_empty() {
            let mut generated = Vec::new();
            for shape in frontier.iter().take_while(|s| s.rank() < max_rank) {
                self.expand(shape, &mut generated);
            }

            if let Some(first) = generated.first() {
                debug!(
                    rank = first.rank(),
                    entries = generated.len(),
                    next_id = self.next_id,
                    "expansion round complete"
                );
            }

            for shape in &generated {
                catalog.insert(shape.clone());
            }
            frontier = generated;
        }

        debug!(entries = catalog.len(), "generation complete");
        catalog
    }

    /// Extend `shape` by each of its blocked cells, collecting new shapes into `out`
    fn expand(&mut self, shape: &Shape, out: &mut Vec<Shape>) {
        for &cell in shape.blocked() {
            let candidate = extend(shape.squares(), cell);
            if self.contains(&candidate) {
                continue;
            }

            let id = self.next_id;
            let new_shape = Shape::new(id, candidate);
            debug_assert!(new_shape.is_connected());
            trace!(id, rank = new_shape.rank(), from = shape.id(), "new shape");

            self.store(new_shape.clone());
            let images = transform::images(&new_shape);
            out.push(new_shape);

            for (t, image) in images {
                self.store_transformed(id, t, image, out);
            }

            self.next_id += 1;
        }
    }

    /// Store a transform image under the originating id unless already known
    fn store_transformed(
        &mut self,
        id: ShapeId,
        t: Transform,
        image: SquareSet,
        out: &mut Vec<Shape>,
    ) {
        if self.contains(&image) {
            return;
        }

        trace!(
            id,
            transform = t.as_str(),
            reflection = t.is_reflection(),
            "new orientation"
        );
        let shape = Shape::new(id, image);
        self.store(shape.clone());
        out.push(shape);
    }

    fn store(&mut self, shape: Shape) {
        debug_assert!(shape.squares().iter().all(|c| c.is_non_negative()));
        self.shapes.entry(shape.rank()).or_default().push(shape);
    }

    /// Whether a shape with exactly these squares is already indexed
    fn contains(&self, squares: &SquareSet) -> bool {
        let rank = squares.len() as Rank;
        self.shapes
            .range(rank..=rank)
            .flat_map(|(_, bucket)| bucket)
            .any(|s| s.squares() == squares)
    }
}

/// Add `cell` to `squares`, shifting everything right/down if the cell is negative
fn extend(squares: &SquareSet, cell: Coord) -> SquareSet {
    let dx = if cell.x < 0 { -cell.x } else { 0 };
    let dy = if cell.y < 0 { -cell.y } else { 0 };

    squares
        .iter()
        .copied()
        .chain(std::iter::once(cell))
        .map(|c| c.offset(dx, dy))
        .collect()
}

/// Generate the catalog up to the default maximum rank (pentominoes)
pub fn generate() -> ShapeCatalog {
    ShapeGenerator::default().generate()
}

/// Generate the catalog up to the configured maximum rank
pub fn generate_up_to(config: GeneratorConfig) -> ShapeCatalog {
    ShapeGenerator::new(config).generate()
}
