//! Diagnostic rendering of the segmented frame.
//!
//! Correctness never depends on this module; it exists so a human can watch
//! what the tracker sees. The CLI writes the result to disk on request.

use line_tracker_core::{Frame, FrameView, Mask};
use nalgebra::Point2;

/// Marker color, `(r, g, b)`.
const MARKER_RGB: (u8, u8, u8) = (255, 0, 0);
const MARKER_RADIUS: i32 = 5;

/// Copy the frame with every off-mask pixel blacked out.
///
/// The mask must have the frame's dimensions.
pub fn segmented_preview(frame: &FrameView<'_>, mask: &Mask) -> Frame {
    debug_assert_eq!((frame.width, frame.height), (mask.width, mask.height));

    let mut out = Frame {
        width: frame.width,
        height: frame.height,
        format: frame.format,
        data: frame.data.to_vec(),
    };
    for y in 0..frame.height {
        for x in 0..frame.width {
            if !mask.is_on(x, y) {
                out.put_rgb(x, y, (0, 0, 0));
            }
        }
    }
    out
}

/// Stamp a filled red disc at the tracked centroid, clipped to the frame.
pub fn draw_centroid_marker(frame: &mut Frame, center: Point2<i32>) {
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                continue;
            }
            let x = center.x + dx;
            let y = center.y + dy;
            if x < 0 || y < 0 || x >= frame.width as i32 || y >= frame.height as i32 {
                continue;
            }
            frame.put_rgb(x as usize, y as usize, MARKER_RGB);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use line_tracker_core::PixelFormat;

    #[test]
    fn preview_keeps_on_pixels_and_blacks_out_the_rest() {
        let mut frame = Frame::black(4, 4, PixelFormat::Rgb8).unwrap();
        frame.put_rgb(1, 1, (0, 0, 255));
        frame.put_rgb(2, 2, (0, 0, 255));

        let mut mask = Mask::zeros(4, 4);
        mask.set_on(1, 1);

        let preview = segmented_preview(&frame.as_view(), &mask);
        assert_eq!(preview.as_view().rgb_at(1, 1), (0, 0, 255));
        // On the frame but off the mask: blacked out.
        assert_eq!(preview.as_view().rgb_at(2, 2), (0, 0, 0));
    }

    #[test]
    fn marker_is_stamped_and_clipped() {
        let mut frame = Frame::black(20, 20, PixelFormat::Rgb8).unwrap();
        draw_centroid_marker(&mut frame, Point2::new(10, 10));
        assert_eq!(frame.as_view().rgb_at(10, 10), (255, 0, 0));
        assert_eq!(frame.as_view().rgb_at(10, 15), (255, 0, 0));
        assert_eq!(frame.as_view().rgb_at(10, 16), (0, 0, 0));

        // A centroid near the border must not panic.
        let mut edge = Frame::black(20, 20, PixelFormat::Rgb8).unwrap();
        draw_centroid_marker(&mut edge, Point2::new(0, 0));
        assert_eq!(edge.as_view().rgb_at(0, 0), (255, 0, 0));
    }
}
