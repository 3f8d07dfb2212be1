//! Demo application driver.
//!
//! Runs the engine against the X11 cursor with a portable polling capture:
//! each tick compares the live cursor against where the driver last left it
//! and feeds the difference back as a raw delta. A real deployment replaces
//! this with an exclusive capture layer (raw input or an evdev grab); the
//! engine itself is agnostic to how deltas arrive.

use crate::config::{SmoothingStrategy, StabilizerConfig};
use crate::constants::UPDATE_INTERVAL_MS;
use crate::cursor_control::{CursorController, PointerDevice};
use crate::engine::StabilizerEngine;
use crate::error::Result;
use crate::utils::safe_cast::round_to_pixel;
use log::{info, warn};
use std::time::{Duration, Instant};

/// Polling driver wiring the engine to a pointer device
pub struct StabilizerApp<P: PointerDevice = CursorController> {
    engine: StabilizerEngine<P>,
    expected: (i32, i32),
}

impl StabilizerApp<CursorController> {
    /// Connect to the display and build the engine
    pub fn new(config: StabilizerConfig) -> Result<Self> {
        let device = CursorController::new()?;
        Ok(Self::with_device(device, config))
    }
}

impl<P: PointerDevice> StabilizerApp<P> {
    /// Build the driver over an arbitrary pointer device
    #[must_use]
    pub fn with_device(device: P, config: StabilizerConfig) -> Self {
        Self {
            engine: StabilizerEngine::new(device, config),
            expected: (0, 0),
        }
    }

    /// Initialize the engine and baseline the poll bookkeeping
    pub fn start(&mut self) -> Result<()> {
        self.engine.initialize();
        self.expected = self.engine.device().position()?;
        Ok(())
    }

    /// Run the tick loop until the process is terminated
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        info!("Stabilizer running, tick interval {UPDATE_INTERVAL_MS} ms");

        loop {
            let tick_start = Instant::now();
            self.poll_once();

            let elapsed = tick_start.elapsed();
            if let Some(remaining) = Duration::from_millis(UPDATE_INTERVAL_MS).checked_sub(elapsed) {
                std::thread::sleep(remaining);
            }
        }
    }

    /// One driver iteration: poll for motion, feed it to the engine, tick
    pub fn poll_once(&mut self) {
        let polled = self.engine.device().position();
        match polled {
            Ok(live) => {
                let dx = live.0 - self.expected.0;
                let dy = live.1 - self.expected.1;
                if dx != 0 || dy != 0 {
                    self.engine.add_mouse_delta(dx as f32, dy as f32);
                }
            }
            Err(e) => warn!("Cursor poll failed: {e}"),
        }

        self.engine.tick();
        self.expected = self.expected_position();
    }

    /// Where the cursor should be after our own writes
    ///
    /// Only the enabled follower strategy keeps an authoritative cursor
    /// position of its own; every other mode (disabled passthrough, the
    /// event-driven filter bank) re-syncs from the device so stale
    /// bookkeeping is never re-fed as input.
    fn expected_position(&self) -> (i32, i32) {
        let config = self.engine.config();
        if config.enabled && config.strategy == SmoothingStrategy::Follower {
            let current = self.engine.follower().current();
            if let (Ok(x), Ok(y)) = (round_to_pixel(current.x), round_to_pixel(current.y)) {
                return (x, y);
            }
        }

        self.engine.device().position().unwrap_or(self.expected)
    }

    /// Cursor position the driver will diff the next poll against
    #[must_use]
    pub const fn expected(&self) -> (i32, i32) {
        self.expected
    }

    /// The engine, read-only
    #[must_use]
    pub const fn engine(&self) -> &StabilizerEngine<P> {
        &self.engine
    }

    /// The engine, for embedding callers
    pub fn engine_mut(&mut self) -> &mut StabilizerEngine<P> {
        &mut self.engine
    }
}
