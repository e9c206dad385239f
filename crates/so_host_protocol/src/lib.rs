use so_app::selection::RectI32;

/// Host command queue items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Core actions (platform-neutral). Executed by the host.
    Core(so_app::Action),

    /// Minimize the main window.
    MinimizeMainWindow,
    /// Restore and focus the main window.
    RestoreMainWindow,

    /// Open the fullscreen selection overlay.
    ShowOverlay,
    /// Repaint the overlay with a new drag rectangle.
    RedrawOverlay(RectI32),
    /// Close the overlay.
    CloseOverlay,

    /// Capture a screen region and run OCR on it.
    CaptureSelection(RectI32),

    /// Copy text to clipboard.
    CopyTextToClipboard(String),

    /// Show an informational message box.
    ShowInfoMessage { title: String, message: String },

    /// Reset the status line after `delay_ms`.
    ScheduleStatusReset(u64),

    /// Persist the main window geometry.
    SaveWindowGeometry(String),

    /// Close the main window and quit.
    CloseWindow,

    /// No-op.
    None,
}
