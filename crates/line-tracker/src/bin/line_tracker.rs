//! Run the line tracker once over an image file and print the resulting
//! steering command. Intended for bench-testing color ranges and gains before
//! wiring the tracker to a live camera transport.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use image::ImageReader;

use line_tracker::overlay::{draw_centroid_marker, segmented_preview};
use line_tracker::{imgio, segment, LineTracker, LineTrackerParams};
use line_tracker_core::{ColorRange, Hsv};

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use line_tracker_core::init_tracing;
#[cfg(not(feature = "tracing"))]
use line_tracker_core::init_with_level;

#[cfg(feature = "tracing")]
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "line-tracker", about = "Visual line follower, single frame")]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    image: PathBuf,

    /// Lower HSV bound, `h,s,v` with hue in 0..=179.
    #[arg(long, value_parser = parse_hsv, default_value = "100,50,50")]
    lower: Hsv,

    /// Upper HSV bound, `h,s,v` with hue in 0..=179.
    #[arg(long, value_parser = parse_hsv, default_value = "130,255,255")]
    upper: Hsv,

    /// Minimal region area (pixel count) to count as track.
    #[arg(long, default_value_t = 50)]
    min_area: u32,

    /// Forward speed while the line is visible.
    #[arg(long, default_value_t = 0.2)]
    speed: f64,

    /// Proportional steering gain per pixel of error.
    #[arg(long, default_value_t = 0.015)]
    kp: f64,

    /// Write the segmented frame with a centroid marker to this path.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_hsv(s: &str) -> Result<Hsv, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected `h,s,v`, got `{s}`"));
    }
    let mut vals = [0u8; 3];
    for (slot, part) in vals.iter_mut().zip(&parts) {
        *slot = u8::from_str(part.trim()).map_err(|e| format!("bad channel `{part}`: {e}"))?;
    }
    Ok(Hsv::new(vals[0], vals[1], vals[2]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Info))?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    let params = LineTrackerParams {
        color_range: ColorRange::new(cli.lower, cli.upper),
        min_area: cli.min_area,
        linear_speed: cli.speed,
        kp: cli.kp,
    };
    let tracker = LineTracker::new(params)?;

    let img = ImageReader::open(&cli.image)?.decode()?.to_rgb8();
    info!("loaded {} ({}x{})", cli.image.display(), img.width(), img.height());

    let result = imgio::track_image(&tracker, &img);

    match result.line {
        Some(p) => println!("line: ({}, {})", p.x, p.y),
        None => println!("line: absent"),
    }
    println!("error_px: {}", result.error_px);
    println!(
        "command: linear.x = {:.3}, angular.z = {:.3}",
        result.command.linear.x, result.command.angular.z
    );

    if let Some(path) = &cli.overlay {
        let view = imgio::frame_view(&img);
        let mask = segment(&view, &tracker.params().color_range);
        let mut preview = segmented_preview(&view, &mask);
        if let Some(p) = result.line {
            draw_centroid_marker(&mut preview, p);
        }
        imgio::to_rgb_image(&preview).save(path)?;
        info!("overlay written to {}", path.display());
    }

    Ok(())
}
