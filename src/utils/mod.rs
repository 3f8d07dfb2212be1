//! Utility functions shared across the crate

/// Safe numeric casting helpers
pub mod safe_cast;
