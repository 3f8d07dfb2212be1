//! Configuration management for the stabilizer.
//!
//! The configuration is a flat document persisted as YAML. Missing fields
//! take their documented defaults and out-of-range values are clamped
//! silently, so a hand-edited or stale file never aborts startup.

use crate::constants::{
    DEFAULT_DELAY_START_MS, DEFAULT_DUAL_SPEED_THRESHOLD, DEFAULT_FOLLOW_STRENGTH,
    DEFAULT_MIN_DISTANCE, DEFAULT_SMOOTHING_STRENGTH, DEFAULT_TARGET_SHOW_DISTANCE,
    DEFAULT_THRESHOLD,
};
use crate::easing::EaseType;
use crate::filters::FilterType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smoothing strategy selection
///
/// The position follower is the primary design; the signal filter bank is the
/// earlier event-driven design, retained as a selectable alternative. The two
/// never run simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingStrategy {
    /// Eased position-following on a fixed tick
    #[default]
    Follower,
    /// Per-event statistical filtering with an intentional-movement bypass
    FilterBank,
}

/// Stabilizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Active smoothing strategy
    pub strategy: SmoothingStrategy,

    /// Master enable switch
    pub enabled: bool,

    /// Fraction of the remaining distance closed per tick (0.05-1.0)
    pub follow_strength: f32,

    /// Distance below which the follower goes idle, in pixels (0.1-5.0)
    pub min_distance: f32,

    /// Easing curve applied to the follow strength
    pub ease_type: EaseType,

    /// Boost follow strength during fast movement
    pub dual_mode: bool,

    /// Speed above which dual mode engages, in px/s
    pub dual_speed_threshold: f32,

    /// Grace period before the follower starts chasing, in ms (0-1000)
    pub delay_start_ms: u32,

    /// Distance at which a target indicator becomes visible (1.0-50.0)
    pub target_show_distance: f32,

    /// Exponential filter strength for the filter-bank strategy (0.1-1.0)
    pub smoothing_strength: f32,

    /// Tremor threshold for the motion classifier (1.0-20.0)
    pub threshold: f32,

    /// Filter variant for the filter-bank strategy
    pub filter_type: FilterType,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            strategy: SmoothingStrategy::Follower,
            enabled: true,
            follow_strength: DEFAULT_FOLLOW_STRENGTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            ease_type: EaseType::EaseOut,
            dual_mode: true,
            dual_speed_threshold: DEFAULT_DUAL_SPEED_THRESHOLD,
            delay_start_ms: DEFAULT_DELAY_START_MS,
            target_show_distance: DEFAULT_TARGET_SHOW_DISTANCE,
            smoothing_strength: DEFAULT_SMOOTHING_STRENGTH,
            threshold: DEFAULT_THRESHOLD,
            filter_type: FilterType::Exponential,
        }
    }
}

impl StabilizerConfig {
    /// Load configuration from a YAML file, then clamp to valid ranges
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.sanitize();
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Clamp every numeric field into its valid range
    ///
    /// Invalid persisted enum values already fall back during
    /// deserialization (`EaseType`/`FilterType` from-u8 conversions).
    pub fn sanitize(&mut self) {
        self.follow_strength = self.follow_strength.clamp(0.05, 1.0);
        self.min_distance = self.min_distance.clamp(0.1, 5.0);
        self.dual_speed_threshold = self.dual_speed_threshold.max(0.0);
        self.delay_start_ms = self.delay_start_ms.min(1000);
        self.target_show_distance = self.target_show_distance.clamp(1.0, 50.0);
        self.smoothing_strength = self.smoothing_strength.clamp(0.1, 1.0);
        self.threshold = self.threshold.clamp(1.0, 20.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StabilizerConfig::default();
        assert_eq!(config.strategy, SmoothingStrategy::Follower);
        assert!(config.enabled);
        assert!((config.follow_strength - 0.15).abs() < 1e-6);
        assert!((config.min_distance - 0.5).abs() < 1e-6);
        assert_eq!(config.ease_type, EaseType::EaseOut);
        assert!(config.dual_mode);
        assert_eq!(config.delay_start_ms, 150);
        assert!((config.smoothing_strength - 0.3).abs() < 1e-6);
        assert!((config.threshold - 5.0).abs() < 1e-6);
        assert_eq!(config.filter_type, FilterType::Exponential);
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut config = StabilizerConfig {
            follow_strength: 7.0,
            min_distance: 0.0,
            delay_start_ms: 99_999,
            smoothing_strength: -1.0,
            threshold: 1000.0,
            target_show_distance: 0.2,
            ..StabilizerConfig::default()
        };
        config.sanitize();

        assert_eq!(config.follow_strength, 1.0);
        assert_eq!(config.min_distance, 0.1);
        assert_eq!(config.delay_start_ms, 1000);
        assert_eq!(config.smoothing_strength, 0.1);
        assert_eq!(config.threshold, 20.0);
        assert_eq!(config.target_show_distance, 1.0);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = StabilizerConfig {
            strategy: SmoothingStrategy::FilterBank,
            follow_strength: 0.4,
            ease_type: EaseType::EaseInOut,
            filter_type: FilterType::Kalman,
            ..StabilizerConfig::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: StabilizerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.strategy, SmoothingStrategy::FilterBank);
        assert!((parsed.follow_strength - 0.4).abs() < 1e-6);
        assert_eq!(parsed.ease_type, EaseType::EaseInOut);
        assert_eq!(parsed.filter_type, FilterType::Kalman);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: StabilizerConfig = serde_yaml::from_str("follow_strength: 0.25\n").unwrap();
        assert!((parsed.follow_strength - 0.25).abs() < 1e-6);
        assert_eq!(parsed.delay_start_ms, 150);
        assert!(parsed.enabled);
    }

    #[test]
    fn test_invalid_enum_values_fall_back() {
        let parsed: StabilizerConfig = serde_yaml::from_str("ease_type: 9\nfilter_type: 7\n").unwrap();
        assert_eq!(parsed.ease_type, EaseType::EaseOut);
        assert_eq!(parsed.filter_type, FilterType::Exponential);
    }
}
