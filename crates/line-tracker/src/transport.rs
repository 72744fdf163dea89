//! Transport capability traits and the synchronous follower loop.
//!
//! The tracker itself never touches the middleware. A deployment implements
//! [`FrameSource`] over its camera subscription and [`CommandSink`] over its
//! velocity publisher, then hands both to [`Follower::run`]. The loop is
//! single-threaded and callback-shaped: one frame in, one command out, no
//! frame ever in flight while another is processed.

use line_tracker_core::{Frame, FrameError, PixelFormat};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::tracker::{ConfigError, LineTracker, SteeringCommand};

/// Undecoded image payload as delivered by the transport.
///
/// Dimensions and buffer length are message metadata and may disagree;
/// [`ImageMessage::decode`] is where that is caught.
#[derive(Clone, Debug)]
pub struct ImageMessage {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl ImageMessage {
    /// Validate the payload into an owned [`Frame`].
    pub fn decode(self) -> Result<Frame, FrameError> {
        Frame::new(self.width, self.height, self.format, self.data)
    }
}

/// Capability: deliver camera frames.
///
/// `Ok(None)` means the stream ended cleanly. Implementations own all
/// queueing and drop policy; the follower never buffers.
pub trait FrameSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn next_frame(&mut self) -> Result<Option<ImageMessage>, Self::Error>;
}

/// Capability: publish velocity commands.
pub trait CommandSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn publish(&mut self, command: &SteeringCommand) -> Result<(), Self::Error>;
}

/// Channel wiring for transport shims.
///
/// The follower loop itself is transport-agnostic; these are the names and
/// queue depth a shim should register with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Subscribed camera image channel.
    pub frame_topic: String,
    /// Published velocity command channel.
    pub command_topic: String,
    /// Subscription queue depth, at least 1.
    pub queue_depth: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            frame_topic: "topic_camera_image".to_owned(),
            command_topic: "/cmd_vel".to_owned(),
            queue_depth: 20,
        }
    }
}

impl TransportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_depth == 0 {
            return Err(ConfigError::InvalidQueueDepth);
        }
        Ok(())
    }
}

/// Errors terminating a follower run.
///
/// Only transport failures end the loop; a malformed frame is logged, skipped,
/// and the next frame is processed independently.
#[derive(thiserror::Error, Debug)]
pub enum FollowError<S, P>
where
    S: std::error::Error,
    P: std::error::Error,
{
    #[error("frame source failed: {0}")]
    Source(#[source] S),

    #[error("command sink failed: {0}")]
    Sink(#[source] P),
}

/// Counters reported when a follower run ends.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FollowStats {
    /// Frames tracked and answered with a command.
    pub frames_processed: u64,
    /// Frames dropped because the payload would not decode.
    pub frames_rejected: u64,
}

/// Synchronous frame-to-command loop binding a tracker to a transport.
pub struct Follower<S, P> {
    tracker: LineTracker,
    source: S,
    sink: P,
}

impl<S: FrameSource, P: CommandSink> Follower<S, P> {
    pub fn new(tracker: LineTracker, source: S, sink: P) -> Self {
        Self {
            tracker,
            source,
            sink,
        }
    }

    #[inline]
    pub fn tracker(&self) -> &LineTracker {
        &self.tracker
    }

    #[inline]
    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Drain the source until it ends, publishing one command per decodable
    /// frame. A frame that fails to decode produces no command for that
    /// invocation; transport errors abort the run.
    pub fn run(&mut self) -> Result<FollowStats, FollowError<S::Error, P::Error>> {
        let mut stats = FollowStats::default();

        while let Some(message) = self.source.next_frame().map_err(FollowError::Source)? {
            match message.decode() {
                Ok(frame) => {
                    let result = self.tracker.track(&frame.as_view());
                    self.sink
                        .publish(&result.command)
                        .map_err(FollowError::Sink)?;
                    stats.frames_processed += 1;
                }
                Err(err) => {
                    warn!("dropping undecodable frame: {err}");
                    stats.frames_rejected += 1;
                }
            }
        }

        info!(
            "frame stream ended: {} processed, {} rejected",
            stats.frames_processed, stats.frames_rejected
        );
        Ok(stats)
    }
}
