/// One recognized text span, in engine reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub confidence: f32,
    pub bounding_box: BoundingBox,
}

/// Bounding box for a text span, relative to the recognized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TextFragment {
    /// Fragment with text only; geometry and confidence are left empty.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: 0.0,
            bounding_box: BoundingBox::default(),
        }
    }
}
