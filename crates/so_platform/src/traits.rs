use image::DynamicImage;
use so_app::selection::RectI32;

use crate::{PlatformServicesError, ScreenSize};

/// Grabs pixels from the display.
///
/// Coordinates are physical screen pixels of the primary display.
pub trait CaptureBackend {
    fn screen_size(&self) -> Result<ScreenSize, PlatformServicesError>;

    /// Capture `rect`. The returned image is `rect.width() x rect.height()`
    /// unless the rectangle extends past the screen edge, in which case it is clipped.
    fn capture_region(&self, rect: RectI32) -> Result<DynamicImage, PlatformServicesError>;
}

/// Write access to the system clipboard.
pub trait ClipboardService {
    fn set_text(&self, text: &str) -> Result<(), PlatformServicesError>;
}

/// Clip `rect` to a `screen` of the given size, returning `(x, y, width, height)`.
///
/// Returns `None` when nothing of the rectangle is on screen.
pub fn clip_to_screen(rect: RectI32, screen: ScreenSize) -> Option<(u32, u32, u32, u32)> {
    let max_x = i64::from(screen.width);
    let max_y = i64::from(screen.height);

    let left = i64::from(rect.left).clamp(0, max_x);
    let top = i64::from(rect.top).clamp(0, max_y);
    let right = i64::from(rect.right).clamp(0, max_x);
    let bottom = i64::from(rect.bottom).clamp(0, max_y);

    if right <= left || bottom <= top {
        return None;
    }

    Some((
        left as u32,
        top as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}
