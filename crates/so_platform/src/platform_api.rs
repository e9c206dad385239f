use thiserror::Error;

/// Error returned by host-facing platform side-effect APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformServicesError {
    #[error("capture error: {0}")]
    Capture(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// Pixel size of the captured display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
