pub const APP_ID: &str = "screen_ocr";

/// Delay between startup and the "ready" state.
pub const INIT_DELAY_MS: u64 = 2000;

/// Delay between closing the overlay and grabbing the screen.
pub const CAPTURE_DELAY_MS: u64 = 100;

pub const OVERLAY_VIEWPORT_ID: &str = "selection_overlay";
