//! Closed-loop visual line follower.
//!
//! Per-frame pipeline: HSV color segmentation -> connected-region extraction
//! -> centroid selection -> proportional steering law. Each frame produces
//! exactly one [`SteeringCommand`]; no state carries across frames.
//!
//! The pub/sub transport that delivers camera frames and consumes velocity
//! commands is an external collaborator, reached only through the
//! [`transport::FrameSource`] and [`transport::CommandSink`] capability
//! traits.
//!
//! ## Quickstart
//!
//! ```
//! use line_tracker::{LineTracker, LineTrackerParams};
//! use line_tracker_core::{Frame, PixelFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut frame = Frame::black(64, 48, PixelFormat::Rgb8)?;
//! for y in 8..40 {
//!     for x in 30..42 {
//!         frame.put_rgb(x, y, (0, 0, 255)); // blue stripe
//!     }
//! }
//!
//! let tracker = LineTracker::new(LineTrackerParams::default())?;
//! let result = tracker.track(&frame.as_view());
//! assert!(result.line.is_some());
//! println!("angular.z = {}", result.command.angular.z);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`mod@segment`]: frame + color range -> binary mask.
//! - [`region`]: connected components, raster moments, tracked-line selection.
//! - [`tracker`]: parameters, the [`LineTracker`] facade, and the control law.
//! - [`transport`]: capability traits and the synchronous follower loop.
//! - [`overlay`]: diagnostic rendering of the segmented frame.
//! - [`imgio`] (feature `image`): adapters to and from `image` crate buffers.

pub mod overlay;
pub mod region;
pub mod segment;
pub mod tracker;
pub mod transport;

#[cfg(feature = "image")]
pub mod imgio;

pub use region::{find_regions, find_tracked_line, Region};
pub use segment::segment;
pub use tracker::{
    compute_command, pixel_error, ConfigError, LineTracker, LineTrackerParams, SteeringCommand,
    TrackResult,
};
pub use transport::{
    CommandSink, FollowError, FollowStats, Follower, FrameSource, ImageMessage, TransportConfig,
};

pub use line_tracker_core as core;
pub use line_tracker_core::{ColorRange, Frame, FrameError, FrameView, Hsv, Mask, PixelFormat};
