//! Signal filtering algorithms for smoothing raw cursor samples.
//!
//! This module provides the filter bank used by the legacy event-driven
//! smoothing strategy: each variant reads the sample history and produces one
//! smoothed point. All variants return a zero sample when the history is
//! empty; callers must treat that as "no data yet", not a valid position.

/// Kalman filter implementation for optimal per-axis state estimation
pub mod kalman;

/// Moving average filter for simple smoothing
pub mod moving_average;

/// Exponential filter for responsive smoothing
pub mod exponential;

use crate::constants::{KALMAN_MEASUREMENT_NOISE, KALMAN_PROCESS_NOISE};
use crate::sample::{Sample, SampleBuffer};
use exponential::ExponentialFilter;
use kalman::AxisKalman;
use serde::{Deserialize, Serialize};

/// Filter variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum FilterType {
    /// Average of the most recent samples
    MovingAverage,
    /// Exponential smoothing with output feedback
    Exponential,
    /// Independent 1-D constant-position Kalman filter per axis
    Kalman,
}

impl From<u8> for FilterType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::MovingAverage,
            2 => Self::Kalman,
            // Unknown persisted values fall back to exponential
            _ => Self::Exponential,
        }
    }
}

impl From<FilterType> for u8 {
    fn from(value: FilterType) -> Self {
        match value {
            FilterType::MovingAverage => 0,
            FilterType::Exponential => 1,
            FilterType::Kalman => 2,
        }
    }
}

impl Default for FilterType {
    fn default() -> Self {
        Self::Exponential
    }
}

/// Stateful filter bank dispatching over the configured filter type
pub struct FilterBank {
    exponential: ExponentialFilter,
    kalman_x: AxisKalman,
    kalman_y: AxisKalman,
}

impl FilterBank {
    /// Create a filter bank with default Kalman noise parameters
    #[must_use]
    pub fn new() -> Self {
        Self::with_kalman_noise(KALMAN_PROCESS_NOISE, KALMAN_MEASUREMENT_NOISE)
    }

    /// Create a filter bank with explicit Kalman noise parameters
    #[must_use]
    pub fn with_kalman_noise(q: f32, r: f32) -> Self {
        Self {
            exponential: ExponentialFilter::new(),
            kalman_x: AxisKalman::new(q, r),
            kalman_y: AxisKalman::new(q, r),
        }
    }

    /// Produce one smoothed point from the sample history
    ///
    /// `alpha` is the exponential smoothing strength, only read by the
    /// exponential variant.
    pub fn apply(&mut self, samples: &SampleBuffer, filter_type: FilterType, alpha: f32) -> Sample {
        match filter_type {
            FilterType::MovingAverage => moving_average::apply(samples),
            FilterType::Exponential => self.exponential.apply(samples, alpha),
            FilterType::Kalman => self.apply_kalman(samples),
        }
    }

    fn apply_kalman(&mut self, samples: &SampleBuffer) -> Sample {
        let Some(current) = samples.newest() else {
            return Sample::default();
        };

        Sample::new(
            self.kalman_x.update(current.x),
            self.kalman_y.update(current.y),
            current.timestamp,
        )
    }

    /// Reset all filter state, e.g. when the stabilizer is re-enabled
    pub fn reset(&mut self) {
        self.exponential.reset();
        self.kalman_x.reset();
        self.kalman_y.reset();
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new()
    }
}
