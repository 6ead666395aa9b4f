//! Session loop: reads input events, applies moves, redraws.
//!
//! Generic over the key source and the screen writer so the whole loop runs
//! in tests without a terminal.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::Grid;
use crate::input::KeySource;
use crate::term::Screen;
use crate::types::{ExitStatus, InputEvent};

/// Drive one game session until Escape, an interrupt, or an I/O failure.
///
/// The grid is drawn once up front and again after every directional move.
/// Ignored keys do not redraw. Read and write errors are returned as-is.
pub fn run<K, W>(grid: &mut Grid, keys: &mut K, screen: &mut Screen<W>) -> Result<ExitStatus>
where
    K: KeySource,
    W: Write,
{
    screen.show(grid).context("failed to draw grid")?;

    loop {
        let event = keys.next_event().context("failed to read key")?;
        match event {
            InputEvent::Move(direction) => {
                let outcome = grid.apply(direction);
                tracing::debug!(
                    direction = direction.as_str(),
                    changed = outcome.changed,
                    merges = outcome.merges,
                    points = outcome.points,
                    score = grid.score(),
                    "move"
                );
                screen.show(grid).context("failed to draw grid")?;
            }
            InputEvent::Escape => return Ok(ExitStatus::Normal),
            InputEvent::Interrupt => return Ok(ExitStatus::Interrupted),
            InputEvent::Other => continue,
        }
    }
}
