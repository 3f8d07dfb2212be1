//! Position-following state machine.
//!
//! The follower keeps two positions: the target accumulated from raw deltas
//! (the "true" demanded pointer location) and the current position actually
//! written to the OS cursor. Each tick moves current toward target by an
//! eased fraction, so the visible cursor trails the hand and tremor-scale
//! jitter in the target mostly cancels out before the cursor commits to it.

use crate::config::StabilizerConfig;
use crate::constants::{
    DUAL_BOOST_CAP, DUAL_BOOST_FACTOR, MIN_DT_SECONDS, VELOCITY_BLEND_NEW, VELOCITY_BLEND_OLD,
};
use nalgebra::Vector2;

/// Target/current position state machine with easing and delayed start
#[derive(Debug, Clone)]
pub struct PositionFollower {
    target: Vector2<f32>,
    current: Vector2<f32>,
    velocity: f32,
    is_moving: bool,
    movement_start_ms: u32,
    last_update_ms: u32,
    first_update: bool,
}

impl PositionFollower {
    /// Create a follower that will snap to the live cursor on first use
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Vector2::zeros(),
            current: Vector2::zeros(),
            velocity: 0.0,
            is_moving: false,
            movement_start_ms: 0,
            last_update_ms: 0,
            first_update: true,
        }
    }

    /// True until the first snap after (re)initialization
    ///
    /// The first delta after startup arrives with an unknown cursor offset;
    /// the caller absorbs it by snapping to the live OS position instead of
    /// accumulating.
    #[must_use]
    pub const fn needs_snap(&self) -> bool {
        self.first_update
    }

    /// Snap both target and current position, ending the first-update phase
    pub fn snap_to(&mut self, pos: Vector2<f32>, now_ms: u32) {
        self.target = pos;
        self.current = pos;
        self.velocity = 0.0;
        self.is_moving = false;
        self.last_update_ms = now_ms;
        self.first_update = false;
    }

    /// Accumulate a raw movement delta into the target position
    ///
    /// The target is clamped to `[0, width-1] x [0, height-1]`.
    pub fn add_delta(&mut self, dx: f32, dy: f32, screen: (u32, u32), now_ms: u32) {
        let (width, height) = screen;
        let new_target = Vector2::new(
            (self.target.x + dx).clamp(0.0, (width.saturating_sub(1)) as f32),
            (self.target.y + dy).clamp(0.0, (height.saturating_sub(1)) as f32),
        );

        self.update_velocity(new_target, now_ms);
        self.target = new_target;
    }

    /// Replace the target position outright (absolute input path)
    pub fn set_target(&mut self, x: f32, y: f32, now_ms: u32) {
        let new_target = Vector2::new(x, y);
        self.update_velocity(new_target, now_ms);
        self.target = new_target;
    }

    /// First-order low-pass on speed only: `0.7 * instant + 0.3 * previous`
    fn update_velocity(&mut self, new_target: Vector2<f32>, now_ms: u32) {
        let dt = now_ms.wrapping_sub(self.last_update_ms) as f32 / 1000.0;
        if dt <= MIN_DT_SECONDS {
            return;
        }

        let instant = (new_target - self.target).norm() / dt;
        self.velocity = instant * VELOCITY_BLEND_NEW + self.velocity * VELOCITY_BLEND_OLD;
        self.last_update_ms = now_ms;
    }

    /// Advance one tick: move current toward target with easing
    ///
    /// Returns the new cursor position to write, or `None` when the follower
    /// is idle or still waiting out the delay-start grace period.
    pub fn update(&mut self, now_ms: u32, config: &StabilizerConfig) -> Option<Vector2<f32>> {
        let distance = self.distance();

        if distance < config.min_distance {
            self.is_moving = false;
            return None;
        }

        if !self.is_moving {
            self.movement_start_ms = now_ms;
            self.is_moving = true;
        }

        // Wait before beginning to follow, letting small flicks settle
        let elapsed = now_ms.wrapping_sub(self.movement_start_ms);
        if elapsed < config.delay_start_ms {
            return None;
        }

        let mut follow_factor = config.follow_strength;
        if config.dual_mode && self.velocity > config.dual_speed_threshold {
            follow_factor = (config.follow_strength * DUAL_BOOST_FACTOR).min(DUAL_BOOST_CAP);
        }

        let eased_factor = config.ease_type.apply(follow_factor);

        self.current += (self.target - self.current) * eased_factor;
        Some(self.current)
    }

    /// Distance between current and target position
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.current - self.target).norm()
    }

    /// Demanded pointer location
    #[must_use]
    pub fn target(&self) -> Vector2<f32> {
        self.target
    }

    /// Position actually rendered as the OS cursor
    #[must_use]
    pub fn current(&self) -> Vector2<f32> {
        self.current
    }

    /// Low-passed speed estimate in px/s
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// True while actively interpolating toward the target
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Return to the uninitialized state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PositionFollower {
    fn default() -> Self {
        Self::new()
    }
}
