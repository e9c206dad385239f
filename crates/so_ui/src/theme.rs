use so_app::display::{StatusKind, TextStyle};

use crate::Color;

pub mod main_window {
    pub const TITLE: &str = "Screen OCR Tool";
    pub const TITLE_FONT_SIZE: f32 = 22.0;

    pub const CAPTURE_BUTTON_LABEL: &str = "OCRする領域を選択";
    pub const COPY_BUTTON_LABEL: &str = "OCRしたテキストをコピー";
    pub const BUTTON_FONT_SIZE: f32 = 15.0;
    pub const BUTTON_PADDING: f32 = 10.0;
    pub const BUTTON_MIN_WIDTH: f32 = 220.0;
    pub const BUTTON_SPACING: f32 = 5.0;

    pub const TEXT_FONT_SIZE: f32 = 15.0;
    pub const TEXT_ROWS: usize = 20;
    pub const TEXT_MARGIN: (f32, f32) = (5.0, 10.0);

    pub const STATUS_FONT_SIZE: f32 = 12.0;

    pub const FRAME_PADDING: f32 = 10.0;
    pub const SECTION_SPACING: f32 = 20.0;
}

pub mod status {
    use crate::Color;

    pub const NORMAL: Color = Color::BLACK;
    pub const SUCCESS: Color = Color::rgb(0x4C, 0xAF, 0x50);
    pub const PROCESSING: Color = Color::rgb(0x19, 0x76, 0xD2);
    pub const ERROR: Color = Color::rgb(0xF4, 0x43, 0x36);
}

pub const PLACEHOLDER_TEXT_COLOR: Color = Color::GRAY;
pub const RESULT_TEXT_COLOR: Color = Color::BLACK;

pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Normal => status::NORMAL,
        StatusKind::Success => status::SUCCESS,
        StatusKind::Processing => status::PROCESSING,
        StatusKind::Error => status::ERROR,
    }
}

pub fn text_color(style: TextStyle) -> Color {
    match style {
        TextStyle::Placeholder => PLACEHOLDER_TEXT_COLOR,
        TextStyle::Result => RESULT_TEXT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_match_palette() {
        assert_eq!(Some(status_color(StatusKind::Success)), Color::from_hex("#4CAF50"));
        assert_eq!(Some(status_color(StatusKind::Processing)), Color::from_hex("#1976D2"));
        assert_eq!(Some(status_color(StatusKind::Error)), Color::from_hex("#F44336"));
        assert_eq!(status_color(StatusKind::Normal), Color::BLACK);
    }

    #[test]
    fn placeholder_is_grey() {
        assert_eq!(text_color(TextStyle::Placeholder), Color::GRAY);
        assert_eq!(text_color(TextStyle::Result), Color::BLACK);
    }
}
