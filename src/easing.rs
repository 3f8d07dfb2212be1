//! Easing curves applied to the follow strength before each step.

use serde::{Deserialize, Serialize};

/// Easing curve selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EaseType {
    /// Identity
    Linear,
    /// Quadratic ease-in: `t²`
    EaseIn,
    /// Quadratic ease-out: `1 - (1 - t)²`
    EaseOut,
    /// Piecewise quadratic, symmetric about t = 0.5
    EaseInOut,
}

impl From<u8> for EaseType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Linear,
            1 => Self::EaseIn,
            3 => Self::EaseInOut,
            // Unknown persisted values fall back to ease-out
            _ => Self::EaseOut,
        }
    }
}

impl From<EaseType> for u8 {
    fn from(value: EaseType) -> Self {
        match value {
            EaseType::Linear => 0,
            EaseType::EaseIn => 1,
            EaseType::EaseOut => 2,
            EaseType::EaseInOut => 3,
        }
    }
}

impl Default for EaseType {
    fn default() -> Self {
        Self::EaseOut
    }
}

impl EaseType {
    /// Evaluate the curve; input and output are clamped to `[0, 1]`
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}
