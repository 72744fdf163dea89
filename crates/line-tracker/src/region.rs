//! Connected-region extraction and tracked-line selection.
//!
//! Regions are external 8-connected components of "on" mask pixels, found in
//! raster-scan order. Interior holes are not separately tracked. Each region
//! carries its raw raster moments; area is the pixel count (m00) and the
//! centroid is the first moments normalized by area.

use line_tracker_core::Mask;
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One connected component of mask pixels, summarized by its raster moments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    /// Zeroth moment: pixel count.
    pub m00: u64,
    /// First moment in x: sum of pixel x coordinates.
    pub m10: u64,
    /// First moment in y: sum of pixel y coordinates.
    pub m01: u64,
}

impl Region {
    #[inline]
    pub fn area(&self) -> u64 {
        self.m00
    }

    /// Centroid truncated to integer pixel coordinates.
    ///
    /// Callers must ensure the region is non-empty; regions produced by
    /// [`find_regions`] always contain at least one pixel.
    #[inline]
    pub fn centroid(&self) -> Point2<i32> {
        Point2::new((self.m10 / self.m00) as i32, (self.m01 / self.m00) as i32)
    }
}

/// Extract all connected components of on-pixels, in raster-scan discovery
/// order (topmost region first, leftmost on ties).
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(mask), fields(width = mask.width, height = mask.height))
)]
pub fn find_regions(mask: &Mask) -> Vec<Region> {
    let (w, h) = (mask.width, mask.height);
    let mut visited = vec![false; w * h];
    let mut regions = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if visited[y * w + x] || !mask.is_on(x, y) {
                continue;
            }

            let mut region = Region {
                m00: 0,
                m10: 0,
                m01: 0,
            };
            visited[y * w + x] = true;
            stack.push((x, y));

            while let Some((px, py)) = stack.pop() {
                region.m00 += 1;
                region.m10 += px as u64;
                region.m01 += py as u64;

                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = px as i64 + dx;
                        let ny = py as i64 + dy;
                        if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                            continue;
                        }
                        let (nx, ny) = (nx as usize, ny as usize);
                        if !visited[ny * w + nx] && mask.is_on(nx, ny) {
                            visited[ny * w + nx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }

            regions.push(region);
        }
    }

    regions
}

/// Select the tracked line centroid from a mask.
///
/// Iterates regions in discovery order; among those whose area strictly
/// exceeds `min_area`, the last one encountered wins — later qualifying
/// regions overwrite earlier ones, regardless of area. Returns `None` when no
/// region qualifies.
pub fn find_tracked_line(mask: &Mask, min_area: u32) -> Option<Point2<i32>> {
    let mut line = None;
    for region in find_regions(mask) {
        if region.area() > u64::from(min_area) {
            line = Some(region.centroid());
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_rects(w: usize, h: usize, rects: &[(usize, usize, usize, usize)]) -> Mask {
        let mut mask = Mask::zeros(w, h);
        for &(x0, y0, rw, rh) in rects {
            for y in y0..y0 + rh {
                for x in x0..x0 + rw {
                    mask.set_on(x, y);
                }
            }
        }
        mask
    }

    #[test]
    fn empty_mask_has_no_regions() {
        let mask = Mask::zeros(10, 10);
        assert!(find_regions(&mask).is_empty());
        assert_eq!(find_tracked_line(&mask, 50), None);
    }

    #[test]
    fn single_rect_moments_and_centroid() {
        // 10x5 rectangle at (4, 3): centroid x = 4..13 -> 8.5 -> 8 truncated.
        let mask = mask_with_rects(20, 20, &[(4, 3, 10, 5)]);
        let regions = find_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area(), 50);
        assert_eq!(regions[0].centroid(), Point2::new(8, 5));
    }

    #[test]
    fn diagonal_pixels_join_one_region() {
        let mut mask = Mask::zeros(4, 4);
        mask.set_on(0, 0);
        mask.set_on(1, 1);
        mask.set_on(2, 2);
        assert_eq!(find_regions(&mask).len(), 1);
    }

    #[test]
    fn separated_rects_form_two_regions_in_raster_order() {
        let mask = mask_with_rects(40, 40, &[(2, 2, 5, 5), (20, 20, 5, 5)]);
        let regions = find_regions(&mask);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].centroid(), Point2::new(4, 4));
        assert_eq!(regions[1].centroid(), Point2::new(22, 22));
    }

    #[test]
    fn last_qualifying_region_wins_over_a_larger_earlier_one() {
        // Earlier region has area 200, later region area 100; both qualify at
        // min_area = 50. Selection is order-dependent, not area-dependent.
        let mask = mask_with_rects(100, 100, &[(10, 5, 20, 10), (10, 60, 10, 10)]);
        let line = find_tracked_line(&mask, 50).unwrap();
        assert_eq!(line, Point2::new(14, 64));
    }

    #[test]
    fn area_threshold_is_strict() {
        // Exactly 50 pixels does not qualify.
        let at_threshold = mask_with_rects(30, 30, &[(4, 3, 10, 5)]);
        assert_eq!(find_tracked_line(&at_threshold, 50), None);

        // 51 pixels does.
        let above = mask_with_rects(30, 30, &[(4, 3, 17, 3)]);
        assert!(find_tracked_line(&above, 50).is_some());
    }

    #[test]
    fn small_regions_do_not_shadow_an_earlier_qualifier() {
        // The later region (area 9) is below threshold and must not overwrite
        // the earlier qualifying one.
        let mask = mask_with_rects(60, 60, &[(2, 2, 10, 10), (40, 40, 3, 3)]);
        let line = find_tracked_line(&mask, 50).unwrap();
        assert_eq!(line, Point2::new(6, 6));
    }
}
