//! 8-bit HSV conversion and inclusive range thresholding.
//!
//! Hue follows the OpenCV 8-bit convention: degrees halved into `0..=179` so
//! the full circle fits in a byte. Saturation and value span `0..=255`.

use serde::{Deserialize, Serialize};

/// One pixel in 8-bit HSV space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue, `0..=179` (degrees / 2).
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Convert an 8-bit RGB triple to 8-bit HSV.
///
/// Value is the channel maximum; saturation is the chroma relative to value;
/// hue is computed in degrees and halved. Gray pixels (zero chroma) get hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max as u8;
    let s = if max == 0.0 {
        0
    } else {
        (255.0 * delta / max).round() as u8
    };

    let h = if delta == 0.0 {
        0
    } else {
        let deg = if max == rf {
            60.0 * (gf - bf) / delta
        } else if max == gf {
            120.0 + 60.0 * (bf - rf) / delta
        } else {
            240.0 + 60.0 * (rf - gf) / delta
        };
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        let half = (deg * 0.5).round() as i32;
        // 359.x degrees can round up to 180; hue wraps back to 0.
        if half >= 180 {
            0
        } else {
            half as u8
        }
    };

    Hsv { h, s, v }
}

/// Errors raised when validating a [`ColorRange`].
#[derive(thiserror::Error, Debug)]
pub enum ColorRangeError {
    #[error("hue bound {hue} exceeds 179")]
    HueOutOfRange { hue: u8 },

    #[error("lower bound ({lower:?}) exceeds upper bound ({upper:?})")]
    InvertedBounds { lower: Hsv, upper: Hsv },
}

/// Inclusive lower/upper bounds in 8-bit HSV space.
///
/// Containment is a per-channel AND, not a distance metric. A single
/// contiguous hue interval only: colors whose hue interval straddles 0 (red,
/// typically) would need two ranges OR'd together, which this type does not
/// model.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ColorRange {
    pub const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    /// Default detection band for a blue track line.
    pub const fn blue() -> Self {
        Self::new(Hsv::new(100, 50, 50), Hsv::new(130, 255, 255))
    }

    /// Check hue bounds and channel ordering. Never coerces.
    pub fn validate(&self) -> Result<(), ColorRangeError> {
        for bound in [self.lower, self.upper] {
            if bound.h > 179 {
                return Err(ColorRangeError::HueOutOfRange { hue: bound.h });
            }
        }
        if self.lower.h > self.upper.h
            || self.lower.s > self.upper.s
            || self.lower.v > self.upper.v
        {
            return Err(ColorRangeError::InvertedBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    /// Inclusive containment on all three channels.
    #[inline]
    pub fn contains(&self, px: Hsv) -> bool {
        px.h >= self.lower.h
            && px.h <= self.upper.h
            && px.s >= self.lower.s
            && px.s <= self.upper.s
            && px.v >= self.lower.v
            && px.v <= self.upper.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_convert_to_expected_hues() {
        assert_eq!(rgb_to_hsv(255, 0, 0), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(0, 255, 0), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv(0, 0, 255), Hsv::new(120, 255, 255));
    }

    #[test]
    fn gray_pixels_have_zero_saturation_and_hue() {
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv::new(0, 0, 255));
        assert_eq!(rgb_to_hsv(90, 90, 90), Hsv::new(0, 0, 90));
    }

    #[test]
    fn hue_never_reaches_180() {
        // Just below pure red from the negative side: hue in degrees is close
        // to 360 and must wrap to 0, not report 180.
        let hsv = rgb_to_hsv(255, 0, 1);
        assert!(hsv.h < 180);
    }

    #[test]
    fn contains_is_inclusive_on_every_bound() {
        let range = ColorRange::new(Hsv::new(100, 50, 50), Hsv::new(130, 255, 255));
        assert!(range.contains(Hsv::new(100, 50, 50)));
        assert!(range.contains(Hsv::new(130, 255, 255)));
        assert!(range.contains(Hsv::new(115, 200, 200)));
        assert!(!range.contains(Hsv::new(99, 200, 200)));
        assert!(!range.contains(Hsv::new(131, 200, 200)));
        assert!(!range.contains(Hsv::new(115, 49, 200)));
        assert!(!range.contains(Hsv::new(115, 200, 49)));
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let hue_high = ColorRange::new(Hsv::new(10, 0, 0), Hsv::new(200, 255, 255));
        assert!(matches!(
            hue_high.validate(),
            Err(ColorRangeError::HueOutOfRange { hue: 200 })
        ));

        let inverted = ColorRange::new(Hsv::new(130, 50, 50), Hsv::new(100, 255, 255));
        assert!(matches!(
            inverted.validate(),
            Err(ColorRangeError::InvertedBounds { .. })
        ));

        assert!(ColorRange::blue().validate().is_ok());
    }
}
