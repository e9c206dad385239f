pub mod display;
pub mod ocr;
pub mod selection;

/// Delay before a transient status message reverts to the ready message.
pub const STATUS_RESET_DELAY_MS: u64 = 2000;

/// Top-level application actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Startup finished; show the placeholder and the ready status.
    InitializationComplete,
    /// User asked to select a region.
    StartCapture,
    Selection(selection::Action),
    /// Capture + recognition finished.
    OcrCompleted { outcome: ocr::Outcome },
    /// User asked to copy the displayed text.
    CopyText,
    /// Clipboard accepted the text.
    TextCopied,
    /// Clipboard rejected the text.
    CopyFailed { message: String },
    /// A scheduled status reset fired.
    StatusTimeout,
    /// Main window moved or resized.
    WindowConfigured { geometry: String, normal: bool },
    /// Main window close requested.
    CloseRequested { geometry: String },
}

/// Top-level application effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Minimize the main window while the overlay is up.
    MinimizeMainWindow,
    /// Restore the main window to its prior state.
    RestoreMainWindow,
    /// Show the fullscreen selection overlay.
    ShowOverlay,
    /// Repaint the overlay for the in-progress drag rectangle.
    RedrawOverlay { selection: selection::RectI32 },
    /// Close the selection overlay.
    CloseOverlay,
    /// Capture the rectangle and run recognition (after the overlay is gone).
    CaptureSelection { selection: selection::RectI32 },
    /// Copy text to clipboard.
    CopyTextToClipboard { text: String },
    /// Show an informational dialog.
    ShowInfoMessage { title: String, message: String },
    /// Revert the status line to ready after a delay.
    ScheduleStatusReset { delay_ms: u64 },
    /// Persist the window geometry descriptor.
    SaveWindowGeometry { geometry: String },
    /// Close the main window (process exits afterwards).
    CloseWindow,
}

/// Core app model.
#[derive(Debug, Default)]
pub struct AppModel {
    selection: selection::Model,
    ocr: ocr::Model,
    display: display::Model,
    last_geometry: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &selection::Model {
        &self.selection
    }

    pub fn ocr(&self) -> &ocr::Model {
        &self.ocr
    }

    pub fn display(&self) -> &display::Model {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut display::Model {
        &mut self.display
    }

    /// True while a selection or an OCR job is in flight.
    pub fn is_busy(&self) -> bool {
        self.selection.is_selecting() || self.ocr.is_running()
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::InitializationComplete => {
                self.display.show_placeholder();
                self.display.reset_status();
                Vec::new()
            }

            Action::StartCapture => {
                // Only one capture can be in flight.
                if self.is_busy() {
                    return Vec::new();
                }
                self.selection.reduce(selection::Action::Begin);
                vec![Effect::MinimizeMainWindow, Effect::ShowOverlay]
            }

            Action::Selection(a) => {
                let effects = self.selection.reduce(a);
                effects
                    .into_iter()
                    .flat_map(|e| self.on_selection_effect(e))
                    .collect()
            }

            Action::OcrCompleted { outcome } => {
                self.ocr.finish();

                match outcome {
                    ocr::Outcome::Text { text } => {
                        self.display.show_result(text);
                        self.display
                            .set_status(display::STATUS_COMPLETED, display::StatusKind::Success);
                    }
                    ocr::Outcome::NoText => {
                        self.display.show_result(display::NO_TEXT_MESSAGE);
                        self.display
                            .set_status(display::STATUS_NO_TEXT, display::StatusKind::Error);
                    }
                    ocr::Outcome::Failed { message } => {
                        self.display.show_result(display::error_text(&message));
                        self.display
                            .set_status(display::STATUS_ERROR, display::StatusKind::Error);
                    }
                }

                vec![Effect::ScheduleStatusReset {
                    delay_ms: STATUS_RESET_DELAY_MS,
                }]
            }

            Action::CopyText => {
                if self.display.is_placeholder() {
                    return vec![Effect::ShowInfoMessage {
                        title: display::COPY_DIALOG_TITLE.to_string(),
                        message: display::COPY_NOTHING_MESSAGE.to_string(),
                    }];
                }
                vec![Effect::CopyTextToClipboard {
                    text: self.display.text().to_string(),
                }]
            }

            Action::TextCopied => {
                self.display
                    .set_status(display::STATUS_COPIED, display::StatusKind::Success);
                vec![Effect::ScheduleStatusReset {
                    delay_ms: STATUS_RESET_DELAY_MS,
                }]
            }

            Action::CopyFailed { message: _ } => {
                self.display
                    .set_status(display::STATUS_COPY_FAILED, display::StatusKind::Error);
                vec![Effect::ScheduleStatusReset {
                    delay_ms: STATUS_RESET_DELAY_MS,
                }]
            }

            Action::StatusTimeout => {
                self.display.reset_status();
                Vec::new()
            }

            Action::WindowConfigured { geometry, normal } => {
                // Minimized/maximized/fullscreen geometry is not worth keeping.
                if !normal || self.last_geometry.as_deref() == Some(geometry.as_str()) {
                    return Vec::new();
                }
                self.last_geometry = Some(geometry.clone());
                vec![Effect::SaveWindowGeometry { geometry }]
            }

            Action::CloseRequested { geometry } => {
                self.last_geometry = Some(geometry.clone());
                vec![Effect::SaveWindowGeometry { geometry }, Effect::CloseWindow]
            }
        }
    }

    fn on_selection_effect(&mut self, effect: selection::Effect) -> Vec<Effect> {
        match effect {
            selection::Effect::UpdateFeedback { selection } => {
                vec![Effect::RedrawOverlay { selection }]
            }

            selection::Effect::Confirmed { selection } => {
                self.ocr.start();
                self.display
                    .set_status(display::STATUS_PROCESSING, display::StatusKind::Processing);
                vec![
                    Effect::CloseOverlay,
                    Effect::RestoreMainWindow,
                    Effect::CaptureSelection { selection },
                ]
            }

            selection::Effect::Rejected { .. } => {
                self.display
                    .set_status(display::STATUS_TOO_SMALL, display::StatusKind::Error);
                vec![Effect::CloseOverlay, Effect::RestoreMainWindow]
            }

            selection::Effect::Cancelled => vec![Effect::CloseOverlay, Effect::RestoreMainWindow],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::display::{self, StatusKind};
    use super::selection::{self as sel, RectI32};
    use super::{Action, AppModel, Effect, STATUS_RESET_DELAY_MS, ocr};

    fn ready() -> AppModel {
        let mut m = AppModel::new();
        m.reduce(Action::InitializationComplete);
        m
    }

    fn drag(m: &mut AppModel, from: (i32, i32), to: (i32, i32)) -> Vec<Effect> {
        m.reduce(Action::Selection(sel::Action::PointerDown {
            x: from.0,
            y: from.1,
        }));
        m.reduce(Action::Selection(sel::Action::PointerMove { x: to.0, y: to.1 }));
        m.reduce(Action::Selection(sel::Action::PointerUp { x: to.0, y: to.1 }))
    }

    #[test]
    fn initialization_shows_placeholder_and_ready_status() {
        let m = ready();
        assert_eq!(m.display().text(), display::PLACEHOLDER_TEXT);
        assert_eq!(m.display().status().message, display::STATUS_READY);
        assert_eq!(m.display().status().kind, StatusKind::Success);
    }

    #[test]
    fn start_capture_minimizes_and_shows_overlay() {
        let mut m = ready();
        let eff = m.reduce(Action::StartCapture);
        assert_eq!(eff, vec![Effect::MinimizeMainWindow, Effect::ShowOverlay]);
        assert!(m.selection().is_selecting());

        // Re-entrant requests are ignored while selecting.
        assert!(m.reduce(Action::StartCapture).is_empty());
    }

    #[test]
    fn confirmed_selection_closes_overlay_then_captures() {
        let mut m = ready();
        m.reduce(Action::StartCapture);
        let eff = drag(&mut m, (300, 300), (100, 100));

        assert_eq!(
            eff,
            vec![
                Effect::CloseOverlay,
                Effect::RestoreMainWindow,
                Effect::CaptureSelection {
                    selection: RectI32::new(100, 100, 300, 300)
                },
            ]
        );
        assert_eq!(m.ocr().phase(), ocr::Phase::Running);
        assert_eq!(m.display().status().message, display::STATUS_PROCESSING);

        // No new capture while OCR is running.
        assert!(m.reduce(Action::StartCapture).is_empty());
    }

    #[test]
    fn small_selection_reports_without_capture() {
        let mut m = ready();
        m.reduce(Action::StartCapture);
        let eff = drag(&mut m, (100, 100), (105, 200));

        assert_eq!(eff, vec![Effect::CloseOverlay, Effect::RestoreMainWindow]);
        assert_eq!(m.display().status().message, display::STATUS_TOO_SMALL);
        assert_eq!(m.display().status().kind, StatusKind::Error);
        assert_eq!(m.ocr().phase(), ocr::Phase::Idle);
        assert_eq!(m.display().text(), display::PLACEHOLDER_TEXT);
    }

    #[test]
    fn cancel_restores_without_touching_status() {
        let mut m = ready();
        m.reduce(Action::StartCapture);
        let eff = m.reduce(Action::Selection(sel::Action::Cancel));
        assert_eq!(eff, vec![Effect::CloseOverlay, Effect::RestoreMainWindow]);
        assert_eq!(m.display().status().message, display::STATUS_READY);
        assert!(!m.is_busy());
    }

    #[test]
    fn drag_feedback_redraws_overlay() {
        let mut m = ready();
        m.reduce(Action::StartCapture);
        m.reduce(Action::Selection(sel::Action::PointerDown { x: 0, y: 0 }));
        let eff = m.reduce(Action::Selection(sel::Action::PointerMove { x: 20, y: 30 }));
        assert_eq!(
            eff,
            vec![Effect::RedrawOverlay {
                selection: RectI32::new(0, 0, 20, 30)
            }]
        );
    }

    #[test]
    fn text_outcome_replaces_display_and_schedules_reset() {
        let mut m = ready();
        m.reduce(Action::StartCapture);
        drag(&mut m, (0, 0), (100, 100));

        let eff = m.reduce(Action::OcrCompleted {
            outcome: ocr::Outcome::Text {
                text: "hello".to_string(),
            },
        });

        assert_eq!(m.display().text(), "hello");
        assert_eq!(m.display().style(), display::TextStyle::Result);
        assert_eq!(m.display().status().message, display::STATUS_COMPLETED);
        assert_eq!(
            eff,
            vec![Effect::ScheduleStatusReset {
                delay_ms: STATUS_RESET_DELAY_MS
            }]
        );
        assert!(!m.is_busy());
    }

    #[test]
    fn no_text_outcome_shows_fixed_message() {
        let mut m = ready();
        m.reduce(Action::OcrCompleted {
            outcome: ocr::Outcome::NoText,
        });
        assert_eq!(m.display().text(), display::NO_TEXT_MESSAGE);
        assert_eq!(m.display().status().message, display::STATUS_NO_TEXT);
    }

    #[test]
    fn failed_outcome_is_shown_inline() {
        let mut m = ready();
        m.reduce(Action::OcrCompleted {
            outcome: ocr::Outcome::Failed {
                message: "capture failed".to_string(),
            },
        });
        assert_eq!(m.display().text(), "エラーが発生しました: capture failed");
        assert_eq!(m.display().status().kind, StatusKind::Error);

        // Still usable afterwards.
        assert_eq!(
            m.reduce(Action::StartCapture),
            vec![Effect::MinimizeMainWindow, Effect::ShowOverlay]
        );
    }

    #[test]
    fn copy_placeholder_notifies_instead_of_copying() {
        let mut m = ready();
        let eff = m.reduce(Action::CopyText);
        assert_eq!(
            eff,
            vec![Effect::ShowInfoMessage {
                title: display::COPY_DIALOG_TITLE.to_string(),
                message: display::COPY_NOTHING_MESSAGE.to_string(),
            }]
        );
    }

    #[test]
    fn copy_result_requests_clipboard_then_confirms() {
        let mut m = ready();
        m.reduce(Action::OcrCompleted {
            outcome: ocr::Outcome::Text {
                text: "abc def".to_string(),
            },
        });

        assert_eq!(
            m.reduce(Action::CopyText),
            vec![Effect::CopyTextToClipboard {
                text: "abc def".to_string()
            }]
        );

        m.reduce(Action::TextCopied);
        assert_eq!(m.display().status().message, display::STATUS_COPIED);

        m.reduce(Action::StatusTimeout);
        assert_eq!(m.display().status().message, display::STATUS_READY);
    }

    #[test]
    fn geometry_saved_only_when_normal_and_changed() {
        let mut m = ready();
        let g = "800x600+100+100".to_string();

        assert_eq!(
            m.reduce(Action::WindowConfigured {
                geometry: g.clone(),
                normal: true
            }),
            vec![Effect::SaveWindowGeometry { geometry: g.clone() }]
        );
        assert!(
            m.reduce(Action::WindowConfigured {
                geometry: g.clone(),
                normal: true
            })
            .is_empty()
        );
        assert!(
            m.reduce(Action::WindowConfigured {
                geometry: "1920x1080+0+0".to_string(),
                normal: false
            })
            .is_empty()
        );
    }

    #[test]
    fn close_always_saves_geometry() {
        let mut m = ready();
        let g = "900x700+10+20".to_string();
        assert_eq!(
            m.reduce(Action::CloseRequested {
                geometry: g.clone()
            }),
            vec![Effect::SaveWindowGeometry { geometry: g }, Effect::CloseWindow]
        );
    }
}
