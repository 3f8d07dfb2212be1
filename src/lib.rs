//! Motion-smoothing engine for steadier pointer control.
//!
//! This library smooths raw mouse movement so the on-screen cursor follows a
//! steadier trajectory, reducing the effect of hand tremor or jitter. Two
//! smoothing strategies are provided:
//!
//! 1. **Position follower** (primary): raw deltas accumulate into a target
//!    position and the cursor chases it each tick with configurable easing,
//!    delay-start and a velocity-adaptive "dual mode" boost.
//! 2. **Signal filter bank** (legacy alternative): each raw sample is pushed
//!    into a ring buffer, classified as intentional or tremor-scale, and
//!    tremor gets smoothed by a moving average, exponential or Kalman filter.
//!
//! Input capture and UI are external collaborators; they feed the engine
//! through [`engine::StabilizerEngine`] entry points and the engine writes
//! the OS cursor through the [`cursor_control::PointerDevice`] trait.
//!
//! # Examples
//!
//! ## Driving the engine
//!
//! ```no_run
//! use mouse_stabilizer::{
//!     config::StabilizerConfig, cursor_control::CursorController, engine::StabilizerEngine,
//! };
//!
//! # fn main() -> mouse_stabilizer::Result<()> {
//! let device = CursorController::new()?;
//! let mut engine = StabilizerEngine::new(device, StabilizerConfig::default());
//! engine.initialize();
//!
//! // Input capture collaborator, per raw event:
//! engine.add_mouse_delta(4.0, -2.0);
//!
//! // Timer collaborator, every 8 ms:
//! engine.tick();
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the filter bank directly
//!
//! ```
//! use mouse_stabilizer::filters::{FilterBank, FilterType};
//! use mouse_stabilizer::sample::{Sample, SampleBuffer};
//!
//! let mut samples = SampleBuffer::new();
//! samples.push(Sample::new(100.0, 100.0, 0));
//! samples.push(Sample::new(101.0, 99.5, 8));
//!
//! let mut bank = FilterBank::new();
//! let smoothed = bank.apply(&samples, FilterType::Kalman, 0.3);
//! println!("Smoothed position: ({:.1}, {:.1})", smoothed.x, smoothed.y);
//! ```

/// Raw movement samples and the fixed-capacity ring buffer
pub mod sample;

/// Signal filtering algorithms for smoothing raw samples
pub mod filters;

/// Velocity/acceleration estimation and intentional-movement detection
pub mod motion_classifier;

/// Easing curves for the position follower
pub mod easing;

/// Position-following state machine
pub mod follower;

/// Engine driver owning the stabilizer state
pub mod engine;

/// Cursor control and the pointer device abstraction
pub mod cursor_control;

/// Configuration management
pub mod config;

/// Demo application driver
pub mod app;

/// Utility functions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

pub use error::{Error, Result};
