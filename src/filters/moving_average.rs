use crate::constants::MOVING_AVERAGE_WINDOW;
use crate::sample::{Sample, SampleBuffer};

/// Average the last `min(count, 5)` samples, per axis
///
/// The window is fixed regardless of buffer capacity. Returns a zero sample
/// when the history is empty.
#[must_use]
pub fn apply(samples: &SampleBuffer) -> Sample {
    if samples.is_empty() {
        return Sample::default();
    }

    let window = samples.len().min(MOVING_AVERAGE_WINDOW);
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;

    for i in 0..window {
        // recent(i) is always valid for i < window <= len
        if let Some(sample) = samples.recent(i) {
            sum_x += sample.x;
            sum_y += sample.y;
        }
    }

    let n = window as f32;
    let timestamp = samples.newest().map_or(0, |s| s.timestamp);

    Sample::new(sum_x / n, sum_y / n, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_returns_zero() {
        let samples = SampleBuffer::new();
        assert_eq!(apply(&samples), Sample::default());
    }

    #[test]
    fn test_identical_points_average_to_that_point() {
        let mut samples = SampleBuffer::new();
        for i in 0..4 {
            samples.push(Sample::new(7.5, -3.0, i));
        }

        let out = apply(&samples);
        assert!((out.x - 7.5).abs() < 1e-6);
        assert!((out.y + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_sequence_average() {
        let mut samples = SampleBuffer::new();
        for i in 0..5 {
            samples.push(Sample::new(i as f32, i as f32, i as u32));
        }

        let out = apply(&samples);
        assert!((out.x - 2.0).abs() < 1e-6);
        assert!((out.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_ignores_older_samples() {
        let mut samples = SampleBuffer::new();
        // Three outliers followed by five identical points
        for i in 0..3 {
            samples.push(Sample::new(1000.0, 1000.0, i));
        }
        for i in 3..8 {
            samples.push(Sample::new(2.0, 2.0, i));
        }

        let out = apply(&samples);
        assert!((out.x - 2.0).abs() < 1e-6);
        assert!((out.y - 2.0).abs() < 1e-6);
    }
}
