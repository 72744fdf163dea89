use serde::{Deserialize, Serialize};

/// Channel order of a 3-byte-per-pixel frame buffer.
///
/// Camera middlewares commonly deliver OpenCV-style BGR; image files decoded
/// with the `image` crate arrive as RGB. The tracker handles both.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PixelFormat {
    Bgr8,
    Rgb8,
}

/// Errors raised when wrapping a raw frame buffer.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("invalid frame buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },

    #[error("invalid frame dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// Borrowed view of a 3-channel, 8-bit color frame.
///
/// Row-major, `len = 3 * w * h`. The view never outlives one processing call;
/// nothing downstream retains it.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
    pub data: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Wrap a raw buffer, validating dimensions and length up front.
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: &'a [u8],
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        let expected = 3 * width * height;
        if data.len() != expected {
            return Err(FrameError::InvalidBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Pixel at `(x, y)` in `(r, g, b)` order regardless of the buffer format.
    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = 3 * (y * self.width + x);
        let (c0, c1, c2) = (self.data[i], self.data[i + 1], self.data[i + 2]);
        match self.format {
            PixelFormat::Rgb8 => (c0, c1, c2),
            PixelFormat::Bgr8 => (c2, c1, c0),
        }
    }
}

/// Owned 3-channel color frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Frame {
    /// Take ownership of a raw buffer, validating it like [`FrameView::new`].
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        FrameView::new(width, height, format, &data)?;
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// All-black frame of the given size.
    pub fn black(width: usize, height: usize, format: PixelFormat) -> Result<Self, FrameError> {
        Self::new(width, height, format, vec![0; 3 * width * height])
    }

    #[inline]
    pub fn as_view(&self) -> FrameView<'_> {
        FrameView {
            width: self.width,
            height: self.height,
            format: self.format,
            data: &self.data,
        }
    }

    /// Overwrite pixel `(x, y)` with an `(r, g, b)` triple.
    #[inline]
    pub fn put_rgb(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
        let i = 3 * (y * self.width + x);
        let (r, g, b) = rgb;
        match self.format {
            PixelFormat::Rgb8 => {
                self.data[i] = r;
                self.data[i + 1] = g;
                self.data[i + 2] = b;
            }
            PixelFormat::Bgr8 => {
                self.data[i] = b;
                self.data[i + 1] = g;
                self.data[i + 2] = r;
            }
        }
    }
}

/// Binary mask, same dimensions as the frame it was derived from.
///
/// Values are 0 or 255. Recomputed on every call, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set_on(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 255;
    }

    /// Number of "on" pixels.
    pub fn count_on(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}
