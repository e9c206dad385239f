pub mod color;
pub mod selection_overlay;
pub mod theme;

pub use color::Color;
pub use selection_overlay::{
    OverlayItem, SelectionOverlayStyle, build_selection_overlay,
    build_selection_overlay_with_style,
};
