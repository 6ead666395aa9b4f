//! One-shot interrupt listener.
//!
//! In raw mode Ctrl+C arrives as a key event, but a SIGINT can still be sent
//! from outside (`kill -INT`). A background thread waits for exactly one such
//! signal and raises an [`InterruptFlag`]; the key source checks the flag
//! between polls. The listener never touches game state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};

/// Shared "interrupt requested" flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Spawn the listener thread. Returns the flag it will raise.
pub fn spawn_interrupt_listener() -> Result<InterruptFlag> {
    let flag = InterruptFlag::new();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;

    let raised = flag.clone();
    thread::Builder::new()
        .name("interrupt-listener".to_string())
        .spawn(move || {
            match runtime.block_on(tokio::signal::ctrl_c()) {
                Ok(()) => {
                    tracing::info!("interrupt signal received");
                    raised.raise();
                }
                Err(e) => tracing::warn!("interrupt listener failed: {}", e),
            }
        })
        .context("failed to spawn interrupt listener")?;

    Ok(flag)
}
