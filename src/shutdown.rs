//! OS termination signals (SIGINT, SIGTERM) routed into the game.
//!
//! Raw mode turns the Ctrl-C chord into a key event, but a signal sent from
//! outside (`kill -INT`, a closing session) would otherwise kill the process
//! with the terminal still in raw mode. The handler only raises a flag; the
//! run loop polls it once per tick and ends the game as interrupted.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

use crate::engine::TickDriver;

#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    raised: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the SIGINT and SIGTERM handlers that raise this flag.
    pub fn register(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.raised))?;
        }
        Ok(())
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Interrupt the game if a signal has arrived. Returns whether it had.
    pub fn apply(&self, driver: &mut TickDriver) -> bool {
        if !self.is_raised() {
            return false;
        }
        driver.interrupt();
        true
    }
}
