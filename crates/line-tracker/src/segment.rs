//! Color segmentation: frame -> binary mask.

use line_tracker_core::{rgb_to_hsv, ColorRange, FrameView, Mask};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Threshold a frame against an inclusive HSV range.
///
/// A mask pixel is on iff the converted HSV triple of the corresponding frame
/// pixel lies within `range` on all three channels. Pure function of its
/// inputs; the output mask has the frame's dimensions.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(frame, range), fields(width = frame.width, height = frame.height))
)]
pub fn segment(frame: &FrameView<'_>, range: &ColorRange) -> Mask {
    let mut mask = Mask::zeros(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let (r, g, b) = frame.rgb_at(x, y);
            if range.contains(rgb_to_hsv(r, g, b)) {
                mask.set_on(x, y);
            }
        }
    }
    mask
}
