//! Proportional steering law.

use nalgebra::{Point2, Vector3};
use serde::{Deserialize, Serialize};

/// Velocity command published once per frame.
///
/// Full 3-axis twist so it maps onto the host platform's velocity message;
/// only `linear.x` (forward) and `angular.z` (yaw, positive left) are ever
/// populated by this controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteeringCommand {
    pub linear: Vector3<f64>,
    pub angular: Vector3<f64>,
}

impl SteeringCommand {
    /// All-zero command: stop translating, stop turning.
    pub fn stop() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }
}

impl Default for SteeringCommand {
    fn default() -> Self {
        Self::stop()
    }
}

/// Signed lateral error in pixels: positive when the line sits right of the
/// frame center. Zero when the line is absent.
#[inline]
pub fn pixel_error(tracked: Option<Point2<i32>>, frame_width: usize) -> i32 {
    match tracked {
        Some(p) => p.x - (frame_width / 2) as i32,
        None => 0,
    }
}

/// Map the tracked line position to a velocity command.
///
/// Proportional only: `angular.z = -kp * error`, so a line right of center
/// yields a right turn under the positive-is-left yaw convention. Forward
/// speed is `linear_speed` while the line is visible and zero otherwise; no
/// search or spin behavior when the line is lost. No clamping, no memory.
pub fn compute_command(
    tracked: Option<Point2<i32>>,
    frame_width: usize,
    linear_speed: f64,
    kp: f64,
) -> SteeringCommand {
    let error = pixel_error(tracked, frame_width);

    let mut cmd = SteeringCommand::stop();
    if tracked.is_some() {
        cmd.linear.x = linear_speed;
    }
    cmd.angular.z = -kp * f64::from(error);
    cmd
}
