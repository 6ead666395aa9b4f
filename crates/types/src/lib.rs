//! Shared types and constants
//!
//! Pure data definitions used by every crate in the workspace: the engine,
//! the input mapping, the terminal layer and the binary. No dependencies.
//!
//! # Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Grid size used when none (or an invalid one) is given |
//! | `MIN_GRID_SIZE` | 2 | Smallest size accepted from the command line |
//! | `MAX_GRID_SIZE` | 32 | Largest size accepted from the command line |
//! | `CELL_WIDTH` | 6 | Width of one rendered cell, right-aligned |
//! | `EMPTY_CELL` | `-` | Placeholder rendered for empty cells |
//!
//! # Examples
//!
//! ```
//! use dois_mil_types::{Direction, DEFAULT_GRID_SIZE};
//!
//! assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
//! assert_eq!(Direction::Left.as_str(), "left");
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Grid size used when the command line gives none, or an unusable one.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest grid size accepted from the command line.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid size accepted from the command line. A 32×32 grid is already
/// 192 columns wide.
pub const MAX_GRID_SIZE: usize = 32;

/// Width of a rendered cell, in characters.
pub const CELL_WIDTH: usize = 6;

/// Placeholder rendered (right-aligned) for an empty cell.
pub const EMPTY_CELL: &str = "-";

/// Label printed in front of the score.
pub const SCORE_LABEL: &str = "Score: ";

/// Direction of a move. Tiles slide toward the named edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use dois_mil_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves along the vertical axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A discrete event produced by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Request a move in the given direction.
    Move(Direction),
    /// Leave the game normally.
    Escape,
    /// Interrupt signal (Ctrl+C); ends the session with a distinct status.
    Interrupt,
    /// Anything else. Ignored by the session loop.
    Other,
}

/// How a session ended. Maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Player pressed Escape.
    Normal,
    /// Terminal setup, key read or screen write failed.
    Failure,
    /// Interrupt signal received.
    Interrupted,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Normal => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Interrupted => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_session_contract() {
        assert_eq!(ExitStatus::Normal.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert_eq!(ExitStatus::Interrupted.code(), 2);
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn direction_axis() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn layout_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(CELL_WIDTH, 6);
        assert_eq!(EMPTY_CELL, "-");
    }
}
