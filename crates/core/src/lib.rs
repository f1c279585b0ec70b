//! Core catalog module - pure, deterministic, and testable
//!
//! This module enumerates every polyomino up to a maximum rank together with
//! all of its rotations and reflections. It has **no dependencies** on
//! rendering, board placement, or I/O, making it:
//!
//! - **Deterministic**: Same maximum rank produces identical catalogs, ids included
//! - **Testable**: Geometry and deduplication are covered by unit and property tests
//! - **Portable**: Consumers only need the returned [`ShapeCatalog`]
//!
//! # Module Structure
//!
//! - [`shape`]: Immutable shape with its occupied squares and blocked cells
//! - [`transform`]: The seven rotations and reflections
//! - [`generator`]: Breadth-first expansion with rank-bucketed deduplication
//! - [`catalog`]: The id multimap returned to callers
//! - [`config`]: Maximum rank, validated and loadable from the environment
//!
//! # Identifiers
//!
//! Every genuinely new shape found by expansion takes the next id. Its distinct
//! transforms are stored under the **same** id, so one id groups all
//! orientations of one free polyomino:
//!
//! | Rank | Distinct ids | Stored entries |
//! |------|--------------|----------------|
//! | 1 | 1 | 1 |
//! | 2 | 1 | 2 |
//! | 3 | 2 | 6 |
//! | 4 | 5 | 19 |
//! | 5 | 12 | 63 |
//!
//! # Example
//!
//! ```
//! use polyomino_core::{generate, GeneratorConfig, ShapeGenerator};
//!
//! // Pentominoes and everything below
//! let catalog = generate();
//! assert_eq!(catalog.of_rank(5).count(), 63);
//!
//! // The seed is always id 0
//! let seed = &catalog.get(0)[0];
//! assert_eq!(seed.rank(), 1);
//!
//! // Smaller catalogs
//! let config = GeneratorConfig::new(3).unwrap();
//! let triominoes = ShapeGenerator::new(config).generate();
//! assert_eq!(triominoes.max_rank(), Some(3));
//! ```

pub mod catalog;
pub mod config;
pub mod generator;
pub mod shape;
pub mod transform;

pub use polyomino_types as types;

// Re-export commonly used types for convenience
pub use catalog::{RankStats, ShapeCatalog};
pub use config::{ConfigError, GeneratorConfig};
pub use generator::{generate, generate_up_to, ShapeGenerator};
pub use shape::Shape;
