use eframe::egui;
use so_app::selection::{Action, RectI32};
use so_ui::{Color, OverlayItem, build_selection_overlay};

use crate::constants::OVERLAY_VIEWPORT_ID;

/// Fullscreen drag-select window.
///
/// Pointer positions are reported in physical pixels so they line up with
/// the captured bitmap.
#[derive(Debug, Default)]
pub struct OverlayView {
    open: bool,
    selection: Option<RectI32>,
    last_pointer: Option<(i32, i32)>,
}

impl OverlayView {
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_selection(&mut self, selection: RectI32) {
        self.selection = Some(selection);
    }

    /// Draw the overlay (if open) and return the selection input gathered this frame.
    pub fn show(&mut self, ctx: &egui::Context) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }

        let builder = egui::ViewportBuilder::default()
            .with_title("Screen OCR selection")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of(OVERLAY_VIEWPORT_ID),
            builder,
            |ctx, _class| self.ui(ctx),
        )
    }

    fn ui(&mut self, ctx: &egui::Context) -> Vec<Action> {
        let ppp = ctx.pixels_per_point();
        let to_px = |p: egui::Pos2| ((p.x * ppp).round() as i32, (p.y * ppp).round() as i32);

        let (pressed, down, released, pos, cancel) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos().or(i.pointer.hover_pos()),
                i.key_pressed(egui::Key::Escape) || i.viewport().close_requested(),
            )
        });

        let mut actions = Vec::new();
        if cancel {
            actions.push(Action::Cancel);
        } else if let Some((x, y)) = pos.map(to_px) {
            if pressed {
                self.last_pointer = Some((x, y));
                actions.push(Action::PointerDown { x, y });
            } else if down && self.last_pointer != Some((x, y)) {
                self.last_pointer = Some((x, y));
                actions.push(Action::PointerMove { x, y });
            }
            if released {
                actions.push(Action::PointerUp { x, y });
            }
        }

        ctx.set_cursor_icon(egui::CursorIcon::Crosshair);

        let screen = ctx.screen_rect();
        let screen_px = (
            (screen.width() * ppp).round() as u32,
            (screen.height() * ppp).round() as u32,
        );
        let pointer = self.last_pointer.map(|(x, y)| (x as f32, y as f32));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let painter = ui.painter();
                for item in build_selection_overlay(screen_px, self.selection, pointer) {
                    paint_item(painter, &item, ppp);
                }
            });

        ctx.request_repaint_of(ctx.parent_viewport_id());
        actions
    }
}

fn paint_item(painter: &egui::Painter, item: &OverlayItem, ppp: f32) {
    match item {
        OverlayItem::Mask {
            width,
            height,
            color,
        } => {
            let rect = egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width / ppp, height / ppp),
            );
            painter.rect_filled(rect, 0.0, color32(*color));
        }
        OverlayItem::Border { rect, color, width } => {
            let rect = egui::Rect::from_min_max(
                egui::pos2(rect.left as f32 / ppp, rect.top as f32 / ppp),
                egui::pos2(rect.right as f32 / ppp, rect.bottom as f32 / ppp),
            );
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(*width, color32(*color)));
        }
        OverlayItem::SizeLabel { x, y, text, color } => {
            painter.text(
                egui::pos2(x / ppp, y / ppp),
                egui::Align2::LEFT_TOP,
                text,
                egui::FontId::proportional(14.0),
                color32(*color),
            );
        }
    }
}

pub(crate) fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
