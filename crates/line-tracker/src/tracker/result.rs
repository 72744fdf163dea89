use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::SteeringCommand;

/// Output of one tracking invocation.
///
/// Exactly one of these is produced per frame, line or no line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackResult {
    /// Centroid of the selected track region, or `None` when no region
    /// qualified. An absent line is a defined outcome, not a fault.
    pub line: Option<Point2<i32>>,

    /// Signed lateral error in pixels (zero when the line is absent).
    pub error_px: i32,

    /// The command to publish for this frame.
    pub command: SteeringCommand,
}
