//! TerminalSession: raw mode and alternate screen as a scoped resource.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Active terminal session. Restores the terminal on [`exit`](Self::exit)
/// or when dropped, whichever comes first.
pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalSession {
    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut session = Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64),
            active: true,
        };
        session.buf.queue(terminal::EnterAlternateScreen)?;
        session.buf.queue(cursor::Hide)?;
        session.flush_buf()?;
        tracing::debug!("terminal session entered");
        Ok(session)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore the terminal. Calling it again is a no-op.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        // Raw mode goes away even if the screen restore could not be written.
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        flushed?;
        tracing::debug!("terminal session restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!("failed to restore terminal: {:#}", e);
        }
    }
}
