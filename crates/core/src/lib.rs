//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the grid engine: the tile matrix, the four directional
//! moves with their shared merge step, the score, and the text rendering.
//! It has **zero dependencies** on terminals, signals or input devices:
//!
//! - **Deterministic**: the same seed builds the same grid
//! - **Total**: moves never fail; only rendering can report an I/O error
//! - **Allocation-free moves**: a move works in place on one flat buffer
//!
//! # Module Structure
//!
//! - [`grid`]: N×N grid, moves, score and `write_to` rendering
//! - [`render`]: byte-accounted writer and [`RenderError`]
//! - [`rng`]: seedable LCG used for the initial tiles
//!
//! # Example
//!
//! ```
//! use dois_mil_core::Grid;
//! use dois_mil_types::Direction;
//!
//! let mut grid = Grid::from_rows(vec![
//!     vec![0, 0, 0, 0],
//!     vec![2, 2, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 4],
//! ])
//! .unwrap();
//!
//! grid.apply(Direction::Right);
//! assert_eq!(grid.get(1, 3), Some(4));
//! assert_eq!(grid.score(), 4);
//!
//! let mut out = Vec::new();
//! let written = grid.write_to(&mut out).unwrap();
//! assert_eq!(written, out.len() as u64);
//! ```

pub mod grid;
pub mod render;
pub mod rng;

pub use dois_mil_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, MoveOutcome};
pub use render::{CountingWriter, RenderError};
pub use rng::SimpleRng;
