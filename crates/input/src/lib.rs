//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and exposes
//! the blocking [`KeySource`] the session loop reads from. Interrupt signals
//! arrive through a one-shot background listener that only raises a flag.

pub mod map;
pub mod signal;
pub mod source;

pub use dois_mil_types as types;

pub use map::{map_key, should_quit};
pub use signal::{spawn_interrupt_listener, InterruptFlag};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
