use line_tracker_core::{FrameError, FrameView, PixelFormat};
use log::debug;

use super::{compute_command, pixel_error, ConfigError, LineTrackerParams, TrackResult};
use crate::region::find_tracked_line;
use crate::segment::segment;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Per-frame perception-to-control pipeline.
///
/// Holds only the fixed configuration; every call is an independent, pure
/// transform of one frame into one [`super::SteeringCommand`]. Transport
/// binding lives elsewhere (see [`crate::transport`]).
#[derive(Clone, Debug)]
pub struct LineTracker {
    params: LineTrackerParams,
}

impl LineTracker {
    /// Build a tracker, validating the configuration up front.
    pub fn new(params: LineTrackerParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &LineTrackerParams {
        &self.params
    }

    /// Run segment -> select -> control on one frame.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn track(&self, frame: &FrameView<'_>) -> TrackResult {
        let mask = segment(frame, &self.params.color_range);
        let line = find_tracked_line(&mask, self.params.min_area);

        let error_px = pixel_error(line, frame.width);
        let command = compute_command(
            line,
            frame.width,
            self.params.linear_speed,
            self.params.kp,
        );

        debug!("error: {} | angular.z: {}", error_px, command.angular.z);

        TrackResult {
            line,
            error_px,
            command,
        }
    }

    /// Validate a raw buffer and track it.
    ///
    /// This is the entry point for transport shims that hand over undecoded
    /// image payloads; a malformed buffer fails the invocation without
    /// producing a command.
    pub fn track_raw(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        format: PixelFormat,
    ) -> Result<TrackResult, FrameError> {
        let frame = FrameView::new(width, height, format, data)?;
        Ok(self.track(&frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::SteeringCommand;
    use line_tracker_core::{Frame, Hsv};

    #[test]
    fn construction_fails_fast_on_bad_config() {
        let params = LineTrackerParams {
            min_area: 0,
            ..LineTrackerParams::default()
        };
        assert!(LineTracker::new(params).is_err());
    }

    #[test]
    fn empty_frame_yields_stop_command() {
        let tracker = LineTracker::new(LineTrackerParams::default()).unwrap();
        let frame = Frame::black(64, 48, PixelFormat::Rgb8).unwrap();
        let result = tracker.track(&frame.as_view());

        assert!(result.line.is_none());
        assert_eq!(result.error_px, 0);
        assert_eq!(result.command, SteeringCommand::stop());
    }

    #[test]
    fn track_raw_rejects_malformed_buffers() {
        let tracker = LineTracker::new(LineTrackerParams::default()).unwrap();
        let short = vec![0u8; 7];
        assert!(tracker
            .track_raw(&short, 64, 48, PixelFormat::Bgr8)
            .is_err());
    }

    #[test]
    fn tuning_flows_through_to_the_command() {
        // Wide-open color range, tiny min_area: a single bright column at
        // x = 48 in a 64-wide frame gives error 16.
        let params = LineTrackerParams {
            color_range: line_tracker_core::ColorRange::new(
                Hsv::new(0, 0, 1),
                Hsv::new(179, 255, 255),
            ),
            min_area: 1,
            linear_speed: 0.5,
            kp: 0.1,
        };
        let tracker = LineTracker::new(params).unwrap();

        let mut frame = Frame::black(64, 48, PixelFormat::Rgb8).unwrap();
        for y in 0..48 {
            frame.put_rgb(48, y, (255, 255, 255));
        }

        let result = tracker.track(&frame.as_view());
        assert_eq!(result.error_px, 16);
        assert_eq!(result.command.linear.x, 0.5);
        assert!((result.command.angular.z + 1.6).abs() < 1e-9);
    }
}
