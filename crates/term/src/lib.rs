//! Terminal layer: session lifecycle and the grid display.
//!
//! Kept apart from `core` so the engine stays a pure data structure:
//! - [`session`] owns raw mode and the alternate screen (acquire on
//!   `enter`, release on `exit` or drop)
//! - [`display`] clears the screen and draws the grid rendering, centered in
//!   the terminal with tiles colored by value

pub mod display;
pub mod session;

pub use dois_mil_core as core;
pub use dois_mil_types as types;

pub use display::{padding, tile_color, Screen, TerminalTooSmall, Viewport};
pub use session::TerminalSession;
