//! Motion classification for separating deliberate movement from tremor.
//!
//! Velocity and acceleration are estimated from the two most recent samples
//! and compared against scaled multiples of the configured tremor threshold.
//! Fast or sharply accelerating movement is "intentional" and bypasses the
//! filter bank; everything else gets smoothed.

use crate::constants::{INTENT_ACCEL_SCALE, INTENT_SPEED_SCALE, MIN_DT_SECONDS};
use crate::sample::SampleBuffer;

/// Velocity/acceleration estimator with an intentional-movement latch
#[derive(Debug, Clone, Default)]
pub struct MotionClassifier {
    velocity_x: f32,
    velocity_y: f32,
    accel_x: f32,
    accel_y: f32,
}

impl MotionClassifier {
    /// Create a classifier at rest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-estimate velocity and acceleration from the newest sample pair
    ///
    /// With fewer than two samples the previous estimates are retained.
    pub fn update(&mut self, samples: &SampleBuffer) {
        let (Some(current), Some(prev)) = (samples.recent(0), samples.recent(1)) else {
            return;
        };

        let dt = (current.timestamp.wrapping_sub(prev.timestamp) as f32 / 1000.0).max(MIN_DT_SECONDS);

        let new_vel_x = (current.x - prev.x) / dt;
        let new_vel_y = (current.y - prev.y) / dt;

        self.accel_x = (new_vel_x - self.velocity_x) / dt;
        self.accel_y = (new_vel_y - self.velocity_y) / dt;

        self.velocity_x = new_vel_x;
        self.velocity_y = new_vel_y;
    }

    /// Euclidean speed in px/s
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity_x.hypot(self.velocity_y)
    }

    /// Euclidean acceleration magnitude in px/s²
    #[must_use]
    pub fn acceleration(&self) -> f32 {
        self.accel_x.hypot(self.accel_y)
    }

    /// Classify the current movement against a tremor threshold
    ///
    /// Intentional means fast or sharply accelerating: speed above
    /// `threshold * 10` or acceleration above `threshold * 20`.
    #[must_use]
    pub fn is_intentional(&self, threshold: f32) -> bool {
        self.speed() > threshold * INTENT_SPEED_SCALE
            || self.acceleration() > threshold * INTENT_ACCEL_SCALE
    }

    /// Reset estimates to rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    #[test]
    fn test_fewer_than_two_samples_is_not_intentional() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();

        classifier.update(&samples);
        assert!(!classifier.is_intentional(5.0));

        samples.push(Sample::new(100.0, 100.0, 0));
        classifier.update(&samples);
        assert!(!classifier.is_intentional(5.0));
        assert_eq!(classifier.speed(), 0.0);
    }

    #[test]
    fn test_fast_movement_is_intentional() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();

        // 10 px in 10 ms: 1000 px/s, well above 5.0 * 10 = 50
        samples.push(Sample::new(0.0, 0.0, 0));
        samples.push(Sample::new(10.0, 0.0, 10));
        classifier.update(&samples);

        assert!(classifier.speed() > 50.0);
        assert!(classifier.is_intentional(5.0));
    }

    #[test]
    fn test_slow_drift_is_not_intentional() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();

        // 0.3 px over 100 ms: 3 px/s, acceleration from rest 30 px/s²,
        // both under the 50 / 100 cutoffs for threshold 5.0
        samples.push(Sample::new(0.0, 0.0, 0));
        samples.push(Sample::new(0.3, 0.0, 100));
        classifier.update(&samples);

        assert!(classifier.speed() <= 50.0);
        assert!(classifier.acceleration() <= 100.0);
        assert!(!classifier.is_intentional(5.0));
    }

    #[test]
    fn test_sharp_acceleration_is_intentional() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();

        samples.push(Sample::new(0.0, 0.0, 0));
        samples.push(Sample::new(0.5, 0.0, 100));
        classifier.update(&samples);
        assert!(!classifier.is_intentional(5.0));

        // Sudden jump: velocity change of ~195 px/s over 10 ms
        samples.push(Sample::new(2.5, 0.0, 110));
        classifier.update(&samples);
        assert!(classifier.acceleration() > 100.0);
        assert!(classifier.is_intentional(5.0));
    }

    #[test]
    fn test_zero_dt_is_clamped() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();

        samples.push(Sample::new(0.0, 0.0, 50));
        samples.push(Sample::new(1.0, 0.0, 50));
        classifier.update(&samples);

        // dt clamps to 1 ms, so speed is finite
        assert!(classifier.speed().is_finite());
        assert!((classifier.speed() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset() {
        let mut classifier = MotionClassifier::new();
        let mut samples = SampleBuffer::new();
        samples.push(Sample::new(0.0, 0.0, 0));
        samples.push(Sample::new(50.0, 0.0, 10));
        classifier.update(&samples);

        classifier.reset();
        assert_eq!(classifier.speed(), 0.0);
        assert_eq!(classifier.acceleration(), 0.0);
    }
}
