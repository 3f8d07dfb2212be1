//! Engine driver owning the single stabilizer state.
//!
//! Entry points are fed by two external collaborators: the input capture
//! layer calls [`StabilizerEngine::add_mouse_delta`] or
//! [`StabilizerEngine::add_mouse_point`] per raw event, and the timer layer
//! calls [`StabilizerEngine::tick`] at a fixed cadence. All mutation happens
//! on one thread, serialized by the caller's event loop.
//!
//! No entry point is fatal: malformed input is ignored or clamped, and OS
//! cursor failures are logged and the step skipped, leaving state consistent
//! for the next call.

use crate::config::{SmoothingStrategy, StabilizerConfig};
use crate::constants::{FALLBACK_POSITION, WRITE_HYSTERESIS};
use crate::cursor_control::PointerDevice;
use crate::filters::FilterBank;
use crate::follower::PositionFollower;
use crate::motion_classifier::MotionClassifier;
use crate::sample::{Sample, SampleBuffer};
use crate::utils::safe_cast::round_to_pixel;
use log::{debug, error, info, trace, warn};
use nalgebra::Vector2;
use std::time::Instant;

/// The motion-smoothing engine
///
/// Exactly one instance exists per physical pointer. It exclusively owns the
/// sample ring, filter states and follower state; collaborators only call
/// the mutation entry points.
pub struct StabilizerEngine<P: PointerDevice> {
    device: P,
    config: StabilizerConfig,
    samples: SampleBuffer,
    filters: FilterBank,
    classifier: MotionClassifier,
    follower: PositionFollower,
    // Re-entrancy guard: a low-level hook observing our own warp_pointer
    // call must not feed it back in as fresh input
    injecting: bool,
    clock: Instant,
}

impl<P: PointerDevice> StabilizerEngine<P> {
    /// Create an engine over a pointer device, clamping the configuration
    #[must_use]
    pub fn new(device: P, mut config: StabilizerConfig) -> Self {
        config.sanitize();
        Self {
            device,
            config,
            samples: SampleBuffer::new(),
            filters: FilterBank::new(),
            classifier: MotionClassifier::new(),
            follower: PositionFollower::new(),
            injecting: false,
            clock: Instant::now(),
        }
    }

    /// Snapshot the live cursor and reset all smoothing state
    pub fn initialize(&mut self) {
        let (x, y) = match self.device.position() {
            Ok(pos) => pos,
            Err(e) => {
                error!("Failed to get cursor position: {e}");
                FALLBACK_POSITION
            }
        };

        self.samples.clear();
        self.filters.reset();
        self.classifier.reset();
        self.follower.reset();
        let now = self.now_ms();
        self.follower.snap_to(Vector2::new(x as f32, y as f32), now);

        info!("Stabilizer initialized at position ({x}, {y})");
    }

    /// Process a raw movement delta from the input capture collaborator
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.injecting || !self.config.enabled {
            return;
        }

        debug!("Processing mouse delta: dx={dx:.1}, dy={dy:.1}");

        match self.config.strategy {
            SmoothingStrategy::Follower => {
                if self.follower.needs_snap() {
                    // Absorb the unknown starting offset instead of accumulating
                    self.snap_to_live_cursor();
                    return;
                }
                let screen = self.device.screen_size();
                let now = self.now_ms();
                self.follower.add_delta(dx, dy, screen, now);
            }
            SmoothingStrategy::FilterBank => {
                // The legacy path works on absolute positions
                let polled = self.device.position();
                match polled {
                    Ok((x, y)) => self.process_point(x as f32 + dx, y as f32 + dy),
                    Err(e) => warn!("Skipping delta, cursor query failed: {e}"),
                }
            }
        }
    }

    /// Process an absolute cursor position from the input capture collaborator
    pub fn add_mouse_point(&mut self, x: f32, y: f32) {
        if self.injecting {
            return;
        }

        if !self.config.enabled {
            // Passthrough: no smoothing authority while disabled
            self.write_cursor(x, y);
            return;
        }

        match self.config.strategy {
            SmoothingStrategy::Follower => {
                let now = self.now_ms();
                if self.follower.needs_snap() {
                    self.follower.snap_to(Vector2::new(x, y), now);
                    self.write_cursor(x, y);
                    return;
                }
                self.follower.set_target(x, y, now);
            }
            SmoothingStrategy::FilterBank => self.process_point(x, y),
        }
    }

    /// Advance the follower one step, driven by the timer collaborator
    ///
    /// A no-op while disabled or under the filter-bank strategy, which is
    /// event-driven rather than tick-driven.
    pub fn tick(&mut self) {
        if !self.config.enabled || self.config.strategy != SmoothingStrategy::Follower {
            return;
        }

        let now = self.now_ms();
        if let Some(pos) = self.follower.update(now, &self.config) {
            trace!("Moving cursor to ({:.1}, {:.1})", pos.x, pos.y);
            self.write_cursor(pos.x, pos.y);
        }
    }

    /// Legacy filter path: record, classify, and either bypass or smooth
    fn process_point(&mut self, x: f32, y: f32) {
        let now = self.now_ms();
        self.samples.push(Sample::new(x, y, now));
        self.classifier.update(&self.samples);

        if self.classifier.is_intentional(self.config.threshold) {
            debug!("Intentional movement detected, bypassing filter");
            return;
        }

        let filtered = self
            .filters
            .apply(&self.samples, self.config.filter_type, self.config.smoothing_strength);

        // Sub-pixel corrections are not worth an OS round trip
        if (filtered.x - x).abs() > WRITE_HYSTERESIS || (filtered.y - y).abs() > WRITE_HYSTERESIS {
            trace!("Applied filter: ({x:.1}, {y:.1}) -> ({:.1}, {:.1})", filtered.x, filtered.y);
            self.write_cursor(filtered.x, filtered.y);
        }
    }

    fn snap_to_live_cursor(&mut self) {
        let (x, y) = match self.device.position() {
            Ok(pos) => pos,
            Err(e) => {
                warn!("Cursor query failed during first update: {e}");
                FALLBACK_POSITION
            }
        };
        let now = self.now_ms();
        self.follower.snap_to(Vector2::new(x as f32, y as f32), now);
    }

    /// Write the cursor with the re-entrancy guard held
    fn write_cursor(&mut self, x: f32, y: f32) {
        let (Ok(px), Ok(py)) = (round_to_pixel(x), round_to_pixel(y)) else {
            warn!("Discarding non-finite cursor position ({x}, {y})");
            return;
        };

        self.injecting = true;
        let result = self.device.set_position(px, py);
        self.injecting = false;

        if let Err(e) = result {
            warn!("Failed to set cursor position to ({px}, {py}): {e}");
        }
    }

    /// Enable or disable smoothing
    ///
    /// Disabling takes effect on the next entry call; re-enabling resets all
    /// smoothing state so the engine re-snaps to wherever the cursor is now.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;

        if enabled {
            self.samples.clear();
            self.filters.reset();
            self.classifier.reset();
            self.follower.reset();
        }

        info!("Mouse stabilizer {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Flip the enabled flag (hotkey semantics)
    pub fn toggle(&mut self) {
        self.set_enabled(!self.config.enabled);
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    /// Mutable configuration, read again on the next tick/delta
    pub fn config_mut(&mut self) -> &mut StabilizerConfig {
        &mut self.config
    }

    /// Follower state, read-only (target indicator overlays read this)
    #[must_use]
    pub const fn follower(&self) -> &PositionFollower {
        &self.follower
    }

    /// The underlying pointer device
    #[must_use]
    pub const fn device(&self) -> &P {
        &self.device
    }

    fn now_ms(&self) -> u32 {
        self.clock.elapsed().as_millis() as u32
    }
}
