use std::time::{Duration, Instant};

use so_app::selection::RectI32;
use so_app::{Action, AppModel, display};
use so_platform::ClipboardService;
use so_settings::ConfigManager;

use crate::command_executor::CommandExecutor;
use crate::constants::INIT_DELAY_MS;
use crate::core_bridge;
use crate::system::SystemManager;

/// Window-level work the view layer has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    MinimizeMainWindow,
    RestoreMainWindow,
    ShowOverlay,
    RedrawOverlay(RectI32),
    CloseOverlay,
    ShowMessage { title: String, message: String },
    CloseWindow,
}

/// Confirmed selection waiting for the overlay to disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCapture {
    pub selection: RectI32,
    pub due: Instant,
}

/// Host application state, independent of the windowing toolkit.
///
/// The view feeds it actions and a clock via [`App::tick`], then drains
/// [`ViewRequest`]s to apply to the real windows.
pub struct App {
    /// Core state/actions/effects (platform-neutral).
    core: AppModel,

    system: SystemManager,
    clipboard: Box<dyn ClipboardService>,
    config: ConfigManager,

    init_due: Option<Instant>,
    status_reset_due: Option<Instant>,
    pending_capture: Option<PendingCapture>,

    view_requests: Vec<ViewRequest>,
}

impl App {
    pub fn new(
        system: SystemManager,
        clipboard: Box<dyn ClipboardService>,
        config: ConfigManager,
        started_at: Instant,
    ) -> Self {
        Self {
            core: AppModel::new(),
            system,
            clipboard,
            config,
            init_due: Some(started_at + Duration::from_millis(INIT_DELAY_MS)),
            status_reset_due: None,
            pending_capture: None,
            view_requests: Vec::new(),
        }
    }

    pub fn core(&self) -> &AppModel {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut AppModel {
        &mut self.core
    }

    /// Editable display buffer.
    pub fn display_mut(&mut self) -> &mut display::Model {
        self.core.display_mut()
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub(crate) fn clipboard(&self) -> &dyn ClipboardService {
        self.clipboard.as_ref()
    }

    /// Run one core action and everything it triggers.
    pub fn dispatch(&mut self, action: Action) {
        let commands = core_bridge::dispatch(&mut self.core, action);
        self.execute_command_chain(commands);
    }

    /// Fire every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.init_due.is_some_and(|due| due <= now) {
            self.init_due = None;
            tracing::info!("Initialization complete");
            self.dispatch(Action::InitializationComplete);
        }

        if let Some(pending) = self.pending_capture
            && pending.due <= now
        {
            self.pending_capture = None;
            let outcome = self.system.recognize_text_from_selection(pending.selection);
            self.dispatch(Action::OcrCompleted { outcome });
        }

        if self.status_reset_due.is_some_and(|due| due <= now) {
            self.status_reset_due = None;
            self.dispatch(Action::StatusTimeout);
        }
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.init_due,
            self.pending_capture.map(|p| p.due),
            self.status_reset_due,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn has_pending_capture(&self) -> bool {
        self.pending_capture.is_some()
    }

    pub fn drain_view_requests(&mut self) -> Vec<ViewRequest> {
        std::mem::take(&mut self.view_requests)
    }

    pub(crate) fn push_view_request(&mut self, request: ViewRequest) {
        self.view_requests.push(request);
    }

    pub(crate) fn schedule_capture(&mut self, capture: PendingCapture) {
        // A reset firing mid-capture would hide the processing status.
        self.status_reset_due = None;
        self.pending_capture = Some(capture);
    }

    pub(crate) fn schedule_status_reset(&mut self, due: Instant) {
        self.status_reset_due = Some(due);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use image::{DynamicImage, RgbaImage};
    use so_app::display::StatusKind;
    use so_app::selection as sel;
    use so_ocr::{Recognizer, TextFragment};
    use so_platform::{CaptureBackend, PlatformServicesError, ScreenSize};

    use super::*;

    struct StaticRecognizer(Vec<&'static str>);

    impl Recognizer for StaticRecognizer {
        fn recognize(&self, _image: &DynamicImage) -> anyhow::Result<Vec<TextFragment>> {
            Ok(self.0.iter().map(|t| TextFragment::from_text(*t)).collect())
        }
    }

    struct BlankCapture(Rc<RefCell<Vec<RectI32>>>);

    impl CaptureBackend for BlankCapture {
        fn screen_size(&self) -> Result<ScreenSize, PlatformServicesError> {
            Ok(ScreenSize::new(1920, 1080))
        }

        fn capture_region(&self, rect: RectI32) -> Result<DynamicImage, PlatformServicesError> {
            self.0.borrow_mut().push(rect);
            Ok(DynamicImage::ImageRgba8(RgbaImage::new(1, 1)))
        }
    }

    #[derive(Clone, Default)]
    struct MemoryClipboard {
        contents: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl ClipboardService for MemoryClipboard {
        fn set_text(&self, text: &str) -> Result<(), PlatformServicesError> {
            if self.broken {
                return Err(PlatformServicesError::Clipboard("locked".to_string()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        app: App,
        captures: Rc<RefCell<Vec<RectI32>>>,
        clipboard: MemoryClipboard,
        _dir: tempfile::TempDir,
    }

    fn harness(fragments: Vec<&'static str>, clipboard: MemoryClipboard) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let captures = Rc::new(RefCell::new(Vec::new()));
        let system = SystemManager::new(
            Box::new(StaticRecognizer(fragments)),
            Box::new(BlankCapture(captures.clone())),
        );
        let config = ConfigManager::with_path(dir.path().join("window_config.json"));
        let mut app = App::new(system, Box::new(clipboard.clone()), config, Instant::now());
        app.tick(Instant::now() + Duration::from_secs(3));
        Harness {
            app,
            captures,
            clipboard,
            _dir: dir,
        }
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(10)
    }

    fn select(app: &mut App, from: (i32, i32), to: (i32, i32)) {
        app.dispatch(Action::StartCapture);
        app.dispatch(Action::Selection(sel::Action::PointerDown {
            x: from.0,
            y: from.1,
        }));
        app.dispatch(Action::Selection(sel::Action::PointerMove { x: to.0, y: to.1 }));
        app.dispatch(Action::Selection(sel::Action::PointerUp { x: to.0, y: to.1 }));
    }

    #[test]
    fn starts_initializing_then_becomes_ready() {
        let dir = tempfile::tempdir().unwrap();
        let system = SystemManager::new(
            Box::new(StaticRecognizer(vec![])),
            Box::new(BlankCapture(Rc::default())),
        );
        let started = Instant::now();
        let mut app = App::new(
            system,
            Box::new(MemoryClipboard::default()),
            ConfigManager::with_path(dir.path().join("c.json")),
            started,
        );

        assert_eq!(app.core().display().status().message, display::STATUS_INITIALIZING);
        assert_eq!(app.core().display().text(), "");

        app.tick(started + Duration::from_millis(500));
        assert_eq!(app.core().display().status().message, display::STATUS_INITIALIZING);

        app.tick(started + Duration::from_millis(INIT_DELAY_MS));
        assert_eq!(app.core().display().status().message, display::STATUS_READY);
        assert_eq!(app.core().display().text(), display::PLACEHOLDER_TEXT);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn capture_waits_for_overlay_to_close() {
        let mut h = harness(vec!["Hello", "World"], MemoryClipboard::default());
        select(&mut h.app, (300, 300), (100, 100));

        let requests = h.app.drain_view_requests();
        assert_eq!(
            requests,
            vec![
                ViewRequest::MinimizeMainWindow,
                ViewRequest::ShowOverlay,
                ViewRequest::RedrawOverlay(RectI32::new(100, 100, 300, 300)),
                ViewRequest::CloseOverlay,
                ViewRequest::RestoreMainWindow,
            ]
        );
        assert!(h.app.has_pending_capture());
        assert!(h.captures.borrow().is_empty());
        assert_eq!(h.app.core().display().status().message, display::STATUS_PROCESSING);

        h.app.tick(later());
        assert_eq!(*h.captures.borrow(), vec![RectI32::new(100, 100, 300, 300)]);
        assert_eq!(h.app.core().display().text(), "Hello World");
        assert_eq!(h.app.core().display().status().kind, StatusKind::Success);
    }

    #[test]
    fn status_returns_to_ready_after_completion() {
        let mut h = harness(vec!["x"], MemoryClipboard::default());
        select(&mut h.app, (0, 0), (50, 50));
        h.app.tick(later());
        assert_eq!(h.app.core().display().status().message, display::STATUS_COMPLETED);

        h.app.tick(later() + Duration::from_secs(5));
        assert_eq!(h.app.core().display().status().message, display::STATUS_READY);
    }

    #[test]
    fn copy_writes_clipboard_and_updates_status() {
        let mut h = harness(vec!["テスト"], MemoryClipboard::default());
        select(&mut h.app, (0, 0), (50, 50));
        h.app.tick(later());
        h.app.drain_view_requests();

        h.app.dispatch(Action::CopyText);
        assert_eq!(h.clipboard.contents.borrow().as_deref(), Some("テスト"));
        assert_eq!(h.app.core().display().status().message, display::STATUS_COPIED);
        assert!(h.app.drain_view_requests().is_empty());
    }

    #[test]
    fn copy_failure_is_reported_in_status() {
        let clipboard = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        let mut h = harness(vec!["abc"], clipboard);
        select(&mut h.app, (0, 0), (50, 50));
        h.app.tick(later());

        h.app.dispatch(Action::CopyText);
        let status = h.app.core().display().status();
        assert_eq!(status.message, display::STATUS_COPY_FAILED);
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[test]
    fn close_persists_geometry() {
        let mut h = harness(vec![], MemoryClipboard::default());
        h.app.dispatch(Action::CloseRequested {
            geometry: "1000x700+20+30".to_string(),
        });

        assert_eq!(h.app.drain_view_requests(), vec![ViewRequest::CloseWindow]);
        let reloaded = ConfigManager::with_path(h.app.config().path());
        assert_eq!(reloaded.get().geometry.as_deref(), Some("1000x700+20+30"));
    }
}
