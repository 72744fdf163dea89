use line_tracker_core::ColorRangeError;

/// Errors raised when validating tracker or transport configuration.
///
/// Configuration is checked once, before any frame is processed; invalid
/// values are never silently coerced.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    ColorRange(#[from] ColorRangeError),

    #[error("min_area must be positive")]
    InvalidMinArea,

    #[error("linear_speed must be finite (got {linear_speed})")]
    NonFiniteSpeed { linear_speed: f64 },

    #[error("kp must be finite (got {kp})")]
    NonFiniteGain { kp: f64 },

    #[error("subscription queue depth must be positive")]
    InvalidQueueDepth,
}
