/// 1-D constant-position Kalman filter for a single axis
///
/// Each accepted measurement runs one predict/update cycle:
/// `p += q`, `k = p / (p + r)`, `estimate += k * (z - estimate)`,
/// `p *= 1 - k`. X and Y use two independent instances sharing the same
/// noise parameters.
#[derive(Debug, Clone)]
pub struct AxisKalman {
    estimate: f32,
    error_covariance: f32,
    process_noise: f32,
    measurement_noise: f32,
}

impl AxisKalman {
    /// Create a filter with the given process noise `q` and measurement
    /// noise `r`
    ///
    /// # Panics
    ///
    /// Panics if `q` or `r` is not positive.
    #[must_use]
    pub fn new(q: f32, r: f32) -> Self {
        assert!(q > 0.0, "Process noise must be positive");
        assert!(r > 0.0, "Measurement noise must be positive");
        Self {
            estimate: 0.0,
            error_covariance: 1.0,
            process_noise: q,
            measurement_noise: r,
        }
    }

    /// Fold one measurement into the estimate
    pub fn update(&mut self, measurement: f32) -> f32 {
        self.error_covariance += self.process_noise;

        let gain = self.error_covariance / (self.error_covariance + self.measurement_noise);

        self.estimate += gain * (measurement - self.estimate);
        self.error_covariance *= 1.0 - gain;

        self.estimate
    }

    /// Current estimate without folding in a new measurement
    #[must_use]
    pub const fn estimate(&self) -> f32 {
        self.estimate
    }

    /// Current Kalman gain, as it would apply to the next measurement
    #[must_use]
    pub fn gain(&self) -> f32 {
        let p = self.error_covariance + self.process_noise;
        p / (p + self.measurement_noise)
    }

    /// Reset estimate and covariance to their initial values
    pub fn reset(&mut self) {
        self.estimate = 0.0;
        self.error_covariance = 1.0;
    }
}
