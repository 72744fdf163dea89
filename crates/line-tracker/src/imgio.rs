//! Adapters between `image` crate buffers and the lightweight frame types.
//!
//! Only the outer surfaces (CLI, examples, tests) go through here; the
//! pipeline itself never depends on `image`.

use line_tracker_core::{Frame, FrameView, PixelFormat};

use crate::tracker::{LineTracker, TrackResult};

/// Borrow an `image::RgbImage` as a [`FrameView`] without copying.
pub fn frame_view(img: &image::RgbImage) -> FrameView<'_> {
    FrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        format: PixelFormat::Rgb8,
        data: img.as_raw(),
    }
}

/// Copy an owned [`Frame`] into an `image::RgbImage` for saving.
pub fn to_rgb_image(frame: &Frame) -> image::RgbImage {
    let view = frame.as_view();
    image::RgbImage::from_fn(frame.width as u32, frame.height as u32, |x, y| {
        let (r, g, b) = view.rgb_at(x as usize, y as usize);
        image::Rgb([r, g, b])
    })
}

/// Run the tracker end-to-end on a decoded image.
pub fn track_image(tracker: &LineTracker, img: &image::RgbImage) -> TrackResult {
    tracker.track(&frame_view(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::LineTrackerParams;

    #[test]
    fn rgb_image_round_trips_through_frame() {
        let mut img = image::RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));

        let view = frame_view(&img);
        assert_eq!(view.rgb_at(2, 1), (10, 20, 30));

        let frame = Frame::new(3, 2, PixelFormat::Rgb8, img.as_raw().clone()).unwrap();
        let back = to_rgb_image(&frame);
        assert_eq!(back, img);
    }

    #[test]
    fn track_image_finds_a_blue_stripe() {
        let img = image::RgbImage::from_fn(64, 48, |x, _| {
            if (28..36).contains(&x) {
                image::Rgb([0, 0, 255])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let tracker = LineTracker::new(LineTrackerParams::default()).unwrap();
        let result = track_image(&tracker, &img);
        assert!(result.line.is_some());
    }
}
