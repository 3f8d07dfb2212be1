use crate::sample::{Sample, SampleBuffer};

/// Exponential smoothing filter with output feedback
///
/// `filtered = alpha * current + (1 - alpha) * last_output`, where
/// `last_output` is this filter's own previous output, not the previous raw
/// sample. The first sample ever passes through unfiltered.
pub struct ExponentialFilter {
    last_output: Option<Sample>,
}

impl ExponentialFilter {
    /// Create a filter with no prior output
    #[must_use]
    pub const fn new() -> Self {
        Self { last_output: None }
    }

    /// Smooth the newest sample against the previous output
    pub fn apply(&mut self, samples: &SampleBuffer, alpha: f32) -> Sample {
        let Some(current) = samples.newest().copied() else {
            return Sample::default();
        };

        let filtered = match self.last_output {
            Some(last) => Sample::new(
                alpha * current.x + (1.0 - alpha) * last.x,
                alpha * current.y + (1.0 - alpha) * last.y,
                current.timestamp,
            ),
            None => current,
        };

        self.last_output = Some(filtered);
        filtered
    }

    /// Forget the previous output
    pub fn reset(&mut self) {
        self.last_output = None;
    }
}

impl Default for ExponentialFilter {
    fn default() -> Self {
        Self::new()
    }
}
