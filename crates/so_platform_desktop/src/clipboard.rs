use arboard::Clipboard;
use parking_lot::Mutex;
use so_platform::{ClipboardService, PlatformServicesError};

/// System clipboard backed by arboard.
///
/// The handle is created on first use and kept alive afterwards; on X11 and
/// Wayland the copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Mutex<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardService for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<(), PlatformServicesError> {
        let mut guard = self.inner.lock();

        if guard.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| PlatformServicesError::Clipboard(e.to_string()))?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(PlatformServicesError::Clipboard(
                "clipboard unavailable".to_string(),
            ));
        };

        let result = clipboard.set_text(text);
        if let Err(e) = result {
            // A broken handle is recreated on the next attempt.
            *guard = None;
            return Err(PlatformServicesError::Clipboard(e.to_string()));
        }
        Ok(())
    }
}
