use line_tracker_core::ColorRange;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Fixed per-run configuration of the line tracker.
///
/// An immutable record handed to [`super::LineTracker::new`] at construction,
/// never mutated afterwards. Defaults are tuned for a blue track line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineTrackerParams {
    /// Inclusive HSV band of the track line.
    pub color_range: ColorRange,

    /// Minimal region area (pixel count) to count as track, strict `>`.
    pub min_area: u32,

    /// Forward speed while the line is visible, in the platform's linear
    /// velocity units (e.g. m/s).
    pub linear_speed: f64,

    /// Proportional gain: angular velocity units per pixel of lateral error.
    pub kp: f64,
}

impl Default for LineTrackerParams {
    fn default() -> Self {
        Self {
            color_range: ColorRange::blue(),
            min_area: 50,
            linear_speed: 0.2,
            kp: 0.015,
        }
    }
}

impl LineTrackerParams {
    /// Validate every field. Called by the tracker constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.color_range.validate()?;
        if self.min_area == 0 {
            return Err(ConfigError::InvalidMinArea);
        }
        if !self.linear_speed.is_finite() {
            return Err(ConfigError::NonFiniteSpeed {
                linear_speed: self.linear_speed,
            });
        }
        if !self.kp.is_finite() {
            return Err(ConfigError::NonFiniteGain { kp: self.kp });
        }
        Ok(())
    }
}
