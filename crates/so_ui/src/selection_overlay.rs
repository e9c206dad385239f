/// Platform-neutral integer rectangle, shared with the core.
pub use so_app::selection::RectI32;

use crate::Color;

/// One primitive of the selection overlay, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayItem {
    /// Translucent fill over the whole screen.
    Mask {
        width: f32,
        height: f32,
        color: Color,
    },
    /// Outline of the in-progress selection.
    Border {
        rect: RectI32,
        color: Color,
        width: f32,
    },
    /// `"{w} x {h}"` text, anchored at its top-left corner.
    SizeLabel {
        x: f32,
        y: f32,
        text: String,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct SelectionOverlayStyle {
    pub mask_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub label_color: Color,
    /// Distance of the label from the pointer on both axes.
    pub label_offset: f32,
}

impl Default for SelectionOverlayStyle {
    fn default() -> Self {
        Self {
            mask_color: Color::GRAY.with_alpha(0.3),
            border_color: Color::RED,
            border_width: 2.0,
            label_color: Color::RED,
            label_offset: 10.0,
        }
    }
}

pub fn build_selection_overlay(
    screen_size: (u32, u32),
    selection: Option<RectI32>,
    pointer: Option<(f32, f32)>,
) -> Vec<OverlayItem> {
    build_selection_overlay_with_style(
        screen_size,
        selection,
        pointer,
        &SelectionOverlayStyle::default(),
    )
}

/// Build the draw list for the overlay.
///
/// The mask is always present. Border and size label appear once a drag is
/// underway; the label follows `pointer` when known and the selection's
/// bottom-right corner otherwise.
pub fn build_selection_overlay_with_style(
    screen_size: (u32, u32),
    selection: Option<RectI32>,
    pointer: Option<(f32, f32)>,
    style: &SelectionOverlayStyle,
) -> Vec<OverlayItem> {
    let mut items = Vec::with_capacity(3);

    items.push(OverlayItem::Mask {
        width: screen_size.0 as f32,
        height: screen_size.1 as f32,
        color: style.mask_color,
    });

    let Some(rect) = selection else {
        return items;
    };

    items.push(OverlayItem::Border {
        rect,
        color: style.border_color,
        width: style.border_width,
    });

    let (px, py) = pointer.unwrap_or((rect.right as f32, rect.bottom as f32));
    items.push(OverlayItem::SizeLabel {
        x: px + style.label_offset,
        y: py + style.label_offset,
        text: rect.size_label(),
        color: style.label_color,
    });

    items
}
