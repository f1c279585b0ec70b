//! Terminal catalog rendering module.
//!
//! A small presentation layer for inspecting a generated catalog in a
//! terminal. Shapes are laid out into a framebuffer by [`ShapeSheet`] and
//! flushed with crossterm styling by [`print_frame`].
//!
//! Goals:
//! - Keep `core` free of any rendering concerns
//! - Keep layout pure and unit-testable, with I/O isolated in `renderer`
//! - Compensate for terminal glyph aspect ratio (2 chars wide per square)

pub mod fb;
pub mod renderer;
pub mod sheet;

pub use polyomino_core as core;
pub use polyomino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_lines_into, print_frame};
pub use sheet::ShapeSheet;
