//! Screen capture via the xcap crate.

use image::DynamicImage;
use so_app::selection::RectI32;
use so_platform::{CaptureBackend, PlatformServicesError, ScreenSize, clip_to_screen};
use xcap::Monitor;

/// Captures from the primary monitor.
#[derive(Debug, Default)]
pub struct XcapCaptureBackend;

impl XcapCaptureBackend {
    pub fn new() -> Self {
        Self
    }

    fn primary_monitor() -> Result<Monitor, PlatformServicesError> {
        let monitors = Monitor::all().map_err(capture_error)?;

        let mut fallback = None;
        for monitor in monitors {
            if monitor.is_primary().unwrap_or(false) {
                return Ok(monitor);
            }
            if fallback.is_none() {
                fallback = Some(monitor);
            }
        }

        fallback.ok_or_else(|| PlatformServicesError::Capture("No monitors detected".to_string()))
    }
}

impl CaptureBackend for XcapCaptureBackend {
    fn screen_size(&self) -> Result<ScreenSize, PlatformServicesError> {
        let monitor = Self::primary_monitor()?;
        Ok(ScreenSize::new(
            monitor.width().map_err(capture_error)?,
            monitor.height().map_err(capture_error)?,
        ))
    }

    fn capture_region(&self, rect: RectI32) -> Result<DynamicImage, PlatformServicesError> {
        let monitor = Self::primary_monitor()?;
        let screenshot = monitor.capture_image().map_err(capture_error)?;
        let screen = ScreenSize::new(screenshot.width(), screenshot.height());

        let (x, y, width, height) = clip_to_screen(rect, screen).ok_or_else(|| {
            PlatformServicesError::Capture(format!("selection {rect:?} is outside the screen"))
        })?;

        tracing::debug!(x, y, width, height, "Cropping screenshot");
        let region = image::imageops::crop_imm(&screenshot, x, y, width, height).to_image();
        Ok(DynamicImage::ImageRgba8(region))
    }
}

fn capture_error(e: impl std::fmt::Display) -> PlatformServicesError {
    PlatformServicesError::Capture(e.to_string())
}
