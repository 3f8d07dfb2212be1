//! Raw movement samples and the fixed-capacity ring buffer that holds them.
//!
//! The hot path runs once per input event, so the buffer is arena-backed with
//! explicit head/count indices rather than a growable collection. Once full,
//! every write overwrites the logically oldest sample.

use crate::constants::MAX_BUFFER_SIZE;

/// One raw cursor sample with a monotonic millisecond timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub timestamp: u32,
}

impl Sample {
    /// Create a new sample
    #[must_use]
    pub const fn new(x: f32, y: f32, timestamp: u32) -> Self {
        Self { x, y, timestamp }
    }
}

/// Fixed-capacity ring buffer of the most recent samples
///
/// Invariant: the valid samples are the `count` most recent writes, read by
/// indexing backward from `head - 1`.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    buffer: [Sample; MAX_BUFFER_SIZE],
    head: usize,
    count: usize,
}

impl SampleBuffer {
    /// Create an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [Sample::new(0.0, 0.0, 0); MAX_BUFFER_SIZE],
            head: 0,
            count: 0,
        }
    }

    /// Append a sample, overwriting the oldest once the buffer is full
    pub fn push(&mut self, sample: Sample) {
        self.buffer[self.head] = sample;
        self.head = (self.head + 1) % MAX_BUFFER_SIZE;
        if self.count < MAX_BUFFER_SIZE {
            self.count += 1;
        }
    }

    /// Number of valid samples
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// True when no samples have been recorded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fixed capacity of the buffer
    #[must_use]
    pub const fn capacity(&self) -> usize {
        MAX_BUFFER_SIZE
    }

    /// Get the `n`-th most recent sample (0 = newest)
    #[must_use]
    pub fn recent(&self, n: usize) -> Option<&Sample> {
        if n >= self.count {
            return None;
        }
        let idx = (self.head + MAX_BUFFER_SIZE - 1 - n) % MAX_BUFFER_SIZE;
        Some(&self.buffer[idx])
    }

    /// Newest sample, if any
    #[must_use]
    pub fn newest(&self) -> Option<&Sample> {
        self.recent(0)
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buffer = SampleBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.newest().is_none());
        assert!(buffer.recent(0).is_none());
    }

    #[test]
    fn test_push_and_recent() {
        let mut buffer = SampleBuffer::new();
        buffer.push(Sample::new(1.0, 2.0, 10));
        buffer.push(Sample::new(3.0, 4.0, 20));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.newest().unwrap().x, 3.0);
        assert_eq!(buffer.recent(1).unwrap().x, 1.0);
        assert!(buffer.recent(2).is_none());
    }

    #[test]
    fn test_wraparound_overwrites_oldest() {
        let mut buffer = SampleBuffer::new();
        for i in 0..MAX_BUFFER_SIZE + 3 {
            buffer.push(Sample::new(i as f32, 0.0, i as u32));
        }

        assert_eq!(buffer.len(), MAX_BUFFER_SIZE);
        // Newest is the last write, oldest is the first surviving one
        assert_eq!(buffer.newest().unwrap().x, (MAX_BUFFER_SIZE + 2) as f32);
        assert_eq!(buffer.recent(MAX_BUFFER_SIZE - 1).unwrap().x, 3.0);
    }

    #[test]
    fn test_clear() {
        let mut buffer = SampleBuffer::new();
        buffer.push(Sample::new(1.0, 1.0, 1));
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.newest().is_none());
    }
}
