//! Drive the follower loop from a synthetic frame stream.
//!
//! Stands in for a real transport shim: frames come from a generator that
//! sweeps a blue line across the camera, commands go to stdout.

use std::convert::Infallible;
use std::str::FromStr;

use log::LevelFilter;

use line_tracker::{
    CommandSink, Follower, FrameSource, ImageMessage, LineTracker, LineTrackerParams,
    SteeringCommand,
};
use line_tracker_core::{init_with_level, Frame, PixelFormat};

const WIDTH: usize = 320;
const HEIGHT: usize = 240;

/// Generates frames with a vertical blue stripe sliding left to right.
struct SweepSource {
    remaining: usize,
    stripe_x: usize,
}

impl FrameSource for SweepSource {
    type Error = Infallible;

    fn next_frame(&mut self) -> Result<Option<ImageMessage>, Self::Error> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;

        let mut frame = Frame::black(WIDTH, HEIGHT, PixelFormat::Bgr8).expect("frame dims");
        for y in 0..HEIGHT {
            for x in self.stripe_x..(self.stripe_x + 12).min(WIDTH) {
                frame.put_rgb(x, y, (0, 0, 255));
            }
        }
        self.stripe_x = (self.stripe_x + 20) % (WIDTH - 12);

        Ok(Some(ImageMessage {
            width: frame.width,
            height: frame.height,
            format: frame.format,
            data: frame.data,
        }))
    }
}

struct StdoutSink;

impl CommandSink for StdoutSink {
    type Error = Infallible;

    fn publish(&mut self, command: &SteeringCommand) -> Result<(), Self::Error> {
        println!(
            "cmd_vel: linear.x = {:.3}, angular.z = {:.3}",
            command.linear.x, command.angular.z
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::from_str("info").unwrap_or(LevelFilter::Info))?;

    let tracker = LineTracker::new(LineTrackerParams::default())?;
    let source = SweepSource {
        remaining: 10,
        stripe_x: 20,
    };

    let mut follower = Follower::new(tracker, source, StdoutSink);
    let stats = follower.run()?;
    println!(
        "done: {} frames processed, {} rejected",
        stats.frames_processed, stats.frames_rejected
    );
    Ok(())
}
