//! Line-tracking pipeline.
//!
//! This module wires together color segmentation, region selection, and the
//! proportional control law behind a single validated facade, [`LineTracker`].

mod control;
mod error;
mod params;
mod pipeline;
mod result;

pub use control::{compute_command, pixel_error, SteeringCommand};
pub use error::ConfigError;
pub use params::LineTrackerParams;
pub use pipeline::LineTracker;
pub use result::TrackResult;
