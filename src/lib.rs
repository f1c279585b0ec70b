//! Polyomino catalog (workspace facade crate).
//!
//! This package exposes `polyomino_catalog::{core,term,types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`.

pub mod cli;

pub use polyomino_core as core;
pub use polyomino_term as term;
pub use polyomino_types as types;
