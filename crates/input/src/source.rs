//! Blocking key sources.
//!
//! [`KeySource::next_event`] blocks until the next meaningful event. The
//! terminal implementation polls crossterm with a short timeout so an
//! external interrupt can end the wait.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};

use crate::map::map_key;
use crate::signal::InterruptFlag;
use crate::types::InputEvent;

/// Poll interval while waiting for a key, so the interrupt flag is noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Source of discrete input events.
pub trait KeySource {
    /// Block until the next event. Errors are fatal to the session.
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Key source reading the real terminal through crossterm.
pub struct TerminalKeys {
    interrupt: InterruptFlag,
}

impl TerminalKeys {
    pub fn new(interrupt: InterruptFlag) -> Self {
        Self { interrupt }
    }
}

impl KeySource for TerminalKeys {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            if self.interrupt.is_raised() {
                return Ok(InputEvent::Interrupt);
            }
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            return match event::read()? {
                Event::Key(key) => Ok(map_key(key)),
                _ => Ok(InputEvent::Other),
            };
        }
    }
}

/// Key source replaying a fixed list of events. Runs dry with an error, the
/// same way a closed terminal would.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    events: VecDeque<InputEvent>,
}

impl ScriptedKeys {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("input closed: no more scripted events"))
    }
}
