use eframe::egui;
use so_app::Action;
use so_ui::theme::{self, main_window as layout};

use super::overlay::color32;
use crate::app::App;

/// Draw the main window and return the actions triggered by its buttons.
pub fn show(ctx: &egui::Context, app: &mut App) -> Vec<Action> {
    let mut actions = Vec::new();

    let status = app.core().display().status().clone();
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(
            layout::FRAME_PADDING,
            layout::FRAME_PADDING,
        )))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(status.message)
                    .size(layout::STATUS_FONT_SIZE)
                    .color(color32(theme::status_color(status.kind))),
            );
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::central_panel(&ctx.style()).inner_margin(layout::FRAME_PADDING),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(layout::TITLE)
                        .size(layout::TITLE_FONT_SIZE)
                        .strong(),
                );
            });
            ui.add_space(layout::SECTION_SPACING);

            ui.horizontal(|ui| {
                let row_width = layout::BUTTON_MIN_WIDTH * 2.0 + layout::BUTTON_SPACING;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = layout::BUTTON_SPACING;

                if ui.add(button(layout::CAPTURE_BUTTON_LABEL)).clicked() {
                    actions.push(Action::StartCapture);
                }
                if ui.add(button(layout::COPY_BUTTON_LABEL)).clicked() {
                    actions.push(Action::CopyText);
                }
            });
            ui.add_space(layout::SECTION_SPACING);

            let text_color = color32(theme::text_color(app.core().display().style()));
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(app.display_mut().text_mut())
                            .font(egui::FontId::proportional(layout::TEXT_FONT_SIZE))
                            .text_color(text_color)
                            .desired_rows(layout::TEXT_ROWS)
                            .margin(egui::Margin::symmetric(
                                layout::TEXT_MARGIN.0,
                                layout::TEXT_MARGIN.1,
                            )),
                    );
                });
        });

    actions
}

fn button(label: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(label).size(layout::BUTTON_FONT_SIZE))
        .min_size(egui::vec2(
            layout::BUTTON_MIN_WIDTH,
            layout::BUTTON_FONT_SIZE + layout::BUTTON_PADDING * 2.0,
        ))
}
