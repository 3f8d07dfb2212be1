//! Constants used throughout the application

/// Capacity of the raw sample ring buffer
pub const MAX_BUFFER_SIZE: usize = 32;

/// Window size for the moving average filter
pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// Default exponential smoothing strength (alpha)
pub const DEFAULT_SMOOTHING_STRENGTH: f32 = 0.3;

/// Default tremor threshold for the motion classifier
pub const DEFAULT_THRESHOLD: f32 = 5.0;

/// Kalman filter default process noise (q)
pub const KALMAN_PROCESS_NOISE: f32 = 0.01;

/// Kalman filter default measurement noise (r)
pub const KALMAN_MEASUREMENT_NOISE: f32 = 0.1;

/// Speed scale applied to the tremor threshold when classifying movement
pub const INTENT_SPEED_SCALE: f32 = 10.0;

/// Acceleration scale applied to the tremor threshold when classifying movement
pub const INTENT_ACCEL_SCALE: f32 = 20.0;

/// Default fraction of the remaining distance closed per tick
pub const DEFAULT_FOLLOW_STRENGTH: f32 = 0.15;

/// Default distance below which the follower goes idle
pub const DEFAULT_MIN_DISTANCE: f32 = 0.5;

/// Default grace period before the follower starts chasing the target
pub const DEFAULT_DELAY_START_MS: u32 = 150;

/// Default speed above which dual mode boosts the follow strength (px/s)
pub const DEFAULT_DUAL_SPEED_THRESHOLD: f32 = 100.0;

/// Follow strength multiplier applied while dual mode is active
pub const DUAL_BOOST_FACTOR: f32 = 3.0;

/// Upper bound on the boosted follow strength
pub const DUAL_BOOST_CAP: f32 = 0.8;

/// Velocity low-pass blend: weight of the instantaneous speed
pub const VELOCITY_BLEND_NEW: f32 = 0.7;

/// Velocity low-pass blend: weight of the previous estimate
pub const VELOCITY_BLEND_OLD: f32 = 0.3;

/// Minimum time step for velocity and acceleration estimation (seconds)
pub const MIN_DT_SECONDS: f32 = 0.001;

/// Follower tick cadence driven by the timer collaborator
pub const UPDATE_INTERVAL_MS: u64 = 8;

/// Redraw cadence for an optional target indicator overlay
pub const DRAW_INTERVAL_MS: u64 = 16;

/// Default distance at which a target indicator becomes visible
pub const DEFAULT_TARGET_SHOW_DISTANCE: f32 = 5.0;

/// Minimum cursor displacement worth forwarding to the OS (legacy filter path)
pub const WRITE_HYSTERESIS: f32 = 0.5;

/// Fallback cursor position when the initial position query fails
pub const FALLBACK_POSITION: (i32, i32) = (100, 100);
