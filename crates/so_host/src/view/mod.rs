//! eframe front end: main window, selection overlay and message box.

pub mod fonts;
pub mod main_window;
pub mod overlay;

use std::time::Instant;

use eframe::egui;
use so_app::Action;
use so_settings::WindowGeometry;

use crate::app::{App, ViewRequest};
use overlay::OverlayView;

#[derive(Debug, Clone)]
struct InfoMessage {
    title: String,
    message: String,
}

pub struct ScreenOcrApp {
    app: App,
    overlay: OverlayView,
    message: Option<InfoMessage>,
    last_geometry: Option<String>,
    closing: bool,
}

impl ScreenOcrApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        fonts::install_cjk_font(&cc.egui_ctx);

        Self {
            app,
            overlay: OverlayView::default(),
            message: None,
            last_geometry: None,
            closing: false,
        }
    }

    fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.app.dispatch(action);
        }
    }

    fn apply_view_requests(&mut self, ctx: &egui::Context) {
        for request in self.app.drain_view_requests() {
            match request {
                ViewRequest::MinimizeMainWindow => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                }
                ViewRequest::RestoreMainWindow => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                }
                ViewRequest::ShowOverlay => self.overlay.open(),
                ViewRequest::RedrawOverlay(selection) => self.overlay.set_selection(selection),
                ViewRequest::CloseOverlay => self.overlay.close(),
                ViewRequest::ShowMessage { title, message } => {
                    self.message = Some(InfoMessage { title, message });
                }
                ViewRequest::CloseWindow => {
                    if !self.closing {
                        self.closing = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            }
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if self.closing || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        self.closing = true;

        let geometry = current_geometry(ctx)
            .map(|(geometry, _)| geometry)
            .or_else(|| self.last_geometry.clone())
            .unwrap_or_else(|| self.app.config().initial_geometry().to_string());
        self.app.dispatch(Action::CloseRequested { geometry });
    }

    fn track_geometry(&mut self, ctx: &egui::Context) {
        let Some((geometry, normal)) = current_geometry(ctx) else {
            return;
        };
        if self.last_geometry.as_deref() == Some(geometry.as_str()) {
            return;
        }
        self.last_geometry = Some(geometry.clone());
        self.app
            .dispatch(Action::WindowConfigured { geometry, normal });
    }

    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(&message.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.message = None;
        }
    }
}

impl eframe::App for ScreenOcrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.tick(Instant::now());
        self.handle_close_request(ctx);
        self.track_geometry(ctx);

        let actions = main_window::show(ctx, &mut self.app);
        self.dispatch_all(actions);
        self.show_message(ctx);
        self.apply_view_requests(ctx);

        let selection_actions = self.overlay.show(ctx);
        self.dispatch_all(selection_actions.into_iter().map(Action::Selection));
        self.apply_view_requests(ctx);

        if self.overlay.is_open() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.app.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Lets the overlay viewport show the desktop through its mask.
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Current main-window geometry descriptor and whether the window is in normal state.
fn current_geometry(ctx: &egui::Context) -> Option<(String, bool)> {
    ctx.input(|i| {
        let viewport = i.viewport();
        let outer = viewport.outer_rect?;
        let inner = viewport.inner_rect?;
        let normal = !viewport.minimized.unwrap_or(false)
            && !viewport.maximized.unwrap_or(false)
            && !viewport.fullscreen.unwrap_or(false);

        let geometry = WindowGeometry::new(
            inner.width().round() as u32,
            inner.height().round() as u32,
            outer.min.x.round() as i32,
            outer.min.y.round() as i32,
        );
        Some((geometry.to_string(), normal))
    })
}
