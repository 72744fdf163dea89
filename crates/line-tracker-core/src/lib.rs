//! Pixel-level types and utilities for the `line-tracker` workspace.
//!
//! This crate is intentionally small. It knows about raw color frames, binary
//! masks, and 8-bit HSV thresholding — nothing about regions, control laws, or
//! transports.

mod color;
mod frame;
mod logger;

pub use color::{rgb_to_hsv, ColorRange, ColorRangeError, Hsv};
pub use frame::{Frame, FrameError, FrameView, Mask, PixelFormat};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
