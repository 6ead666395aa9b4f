//! Screen: draws the grid rendering centered and colored on a terminal.
//!
//! The text comes from [`Grid::write_to`] unchanged. The screen places every
//! line with an absolute cursor move, so raw mode needs no `\r\n`
//! translation, and wraps each cell field of the tile rows in a bold
//! foreground color picked by tile value.

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::Grid;
use crate::types::{CELL_WIDTH, EMPTY_CELL};

/// Key hint shown one blank line under the grid.
const HINT: &str = "arrows/wasd/hjkl move, esc/q quit";

/// Lines before the first tile row: blank, score, blank.
const HEADER_LINES: usize = 3;

/// Where a frame is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Top-left corner, no size limit.
    Origin,
    /// Centered in a fixed `cols × rows` area.
    Fixed { cols: u16, rows: u16 },
    /// Centered in the current terminal, queried on every frame.
    Terminal,
}

impl Viewport {
    fn area(self) -> io::Result<Option<(u16, u16)>> {
        match self {
            Viewport::Origin => Ok(None),
            Viewport::Fixed { cols, rows } => Ok(Some((cols, rows))),
            Viewport::Terminal => terminal::size().map(Some),
        }
    }
}

/// The frame does not fit in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalTooSmall {
    /// Columns and rows the frame needs.
    pub needed: (u16, u16),
    /// Columns and rows available.
    pub available: (u16, u16),
}

impl Display for TerminalTooSmall {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "terminal too small: need {}x{}, have {}x{}",
            self.needed.0, self.needed.1, self.available.0, self.available.1
        )
    }
}

impl error::Error for TerminalTooSmall {}

/// Left and top padding centering a `width × height` frame in `area`.
/// Odd leftovers go to the left/top side.
pub fn padding(
    width: usize,
    height: usize,
    area: (u16, u16),
) -> Result<(u16, u16), TerminalTooSmall> {
    let needed = (
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    );
    let (cols, rows) = area;
    if needed.0 > cols || needed.1 > rows {
        return Err(TerminalTooSmall {
            needed,
            available: area,
        });
    }
    Ok(((cols - needed.0).div_ceil(2), (rows - needed.1).div_ceil(2)))
}

/// Foreground color for a tile value.
pub fn tile_color(value: u32) -> Color {
    let ansi = match value {
        0 => 247,
        1 => 208,
        2 => 202,
        4 => 214,
        8 => 226,
        16 => 40,
        32 => 47,
        64 => 14,
        128 => 33,
        256 => 141,
        512 => 213,
        1024 => 201,
        _ => 196,
    };
    Color::AnsiValue(ansi)
}

/// Width of the field `write_to` produces for `value`.
fn field_width(value: u32) -> usize {
    let text = match value {
        0 => EMPTY_CELL.len(),
        v => v.ilog10() as usize + 1,
    };
    text.max(CELL_WIDTH)
}

/// Display sink for the grid. Generic over the writer so it can be tested
/// against an in-memory buffer.
pub struct Screen<W: Write> {
    out: W,
    viewport: Viewport,
    text: Vec<u8>,
    buf: Vec<u8>,
}

impl Screen<io::Stdout> {
    /// Screen on stdout, centered in the terminal.
    pub fn stdout() -> Self {
        Self::with_viewport(io::stdout(), Viewport::Terminal)
    }
}

impl<W: Write> Screen<W> {
    /// Screen drawing from the top-left corner.
    pub fn new(out: W) -> Self {
        Self::with_viewport(out, Viewport::Origin)
    }

    pub fn with_viewport(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            viewport,
            text: Vec::with_capacity(1024),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Clear the screen and draw `grid`. Returns the bytes of grid rendering
    /// produced.
    ///
    /// Fails with [`TerminalTooSmall`] when the frame does not fit; nothing
    /// is written in that case.
    pub fn show(&mut self, grid: &Grid) -> Result<u64> {
        self.text.clear();
        let written = grid.write_to(&mut self.text)?;
        let text = std::str::from_utf8(&self.text).context("grid rendering is not UTF-8")?;

        let width = text
            .lines()
            .map(str::len)
            .chain([HINT.len()])
            .max()
            .unwrap_or(0);
        let height = text.lines().count() + 2;
        let (left, top) = match self.viewport.area()? {
            Some(area) => padding(width, height, area)?,
            None => (0, 0),
        };

        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut rows = grid.rows();
        for (i, line) in text.lines().chain(["", HINT]).enumerate() {
            let y = top.saturating_add(u16::try_from(i).unwrap_or(u16::MAX));
            self.buf.queue(cursor::MoveTo(left, y))?;
            let row = if i >= HEADER_LINES { rows.next() } else { None };
            match row {
                Some(row) => queue_row(&mut self.buf, line, row)?,
                None => {
                    self.buf.queue(Print(line))?;
                }
            }
        }

        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(written)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Queue one tile row, coloring each cell field of `line`.
fn queue_row(buf: &mut Vec<u8>, line: &str, row: &[u32]) -> io::Result<()> {
    let mut rest = line;
    for &value in row {
        let (field, tail) = rest.split_at(field_width(value).min(rest.len()));
        rest = tail;
        buf.queue(SetAttribute(Attribute::Bold))?;
        buf.queue(SetForegroundColor(tile_color(value)))?;
        buf.queue(Print(field))?;
        buf.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}
