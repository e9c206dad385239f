//! Text area and status line shown by the main window.

/// Initial text shown until the first capture completes.
pub const PLACEHOLDER_TEXT: &str = "ここにキャプチャしたテキストが表示されます";

/// Text shown when recognition produced no fragments.
pub const NO_TEXT_MESSAGE: &str = "テキストが検出されませんでした。";

pub const STATUS_INITIALIZING: &str = "初期化中...";
pub const STATUS_READY: &str = "OCRを実行できます";
pub const STATUS_PROCESSING: &str = "OCR処理中...";
pub const STATUS_COMPLETED: &str = "OCR完了";
pub const STATUS_NO_TEXT: &str = "テキストが検出されませんでした";
pub const STATUS_ERROR: &str = "エラーが発生しました";
pub const STATUS_TOO_SMALL: &str = "選択範囲が小さすぎます";
pub const STATUS_COPIED: &str = "テキストをコピーしました";
pub const STATUS_COPY_FAILED: &str = "コピーに失敗しました";

pub const COPY_DIALOG_TITLE: &str = "コピー";
pub const COPY_NOTHING_MESSAGE: &str = "コピーするテキストがありません";

/// Inline error text for a failed capture.
pub fn error_text(detail: &str) -> String {
    format!("{STATUS_ERROR}: {detail}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Normal,
    Processing,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn ready() -> Self {
        Self::new(STATUS_READY, StatusKind::Success)
    }
}

/// How the text area renders its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Placeholder,
    Result,
}

#[derive(Debug, Clone)]
pub struct Model {
    text: String,
    style: TextStyle,
    status: Status,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: TextStyle::Placeholder,
            status: Status::new(STATUS_INITIALIZING, StatusKind::Processing),
        }
    }
}

impl Model {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the editable text area.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// True when there is nothing worth copying (initial blank or placeholder).
    pub fn is_placeholder(&self) -> bool {
        let trimmed = self.text.trim();
        trimmed.is_empty() || trimmed == PLACEHOLDER_TEXT
    }

    pub fn show_placeholder(&mut self) {
        self.text = PLACEHOLDER_TEXT.to_string();
        self.style = TextStyle::Placeholder;
    }

    /// Replace the displayed text; never appends to a previous result.
    pub fn show_result(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.style = TextStyle::Result;
    }

    pub fn set_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status = Status::new(message, kind);
    }

    pub fn reset_status(&mut self) {
        self.status = Status::ready();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank_and_initializing() {
        let m = Model::default();
        assert_eq!(m.text(), "");
        assert!(m.is_placeholder());
        assert_eq!(m.status().message, STATUS_INITIALIZING);
        assert_eq!(m.status().kind, StatusKind::Processing);
    }

    #[test]
    fn placeholder_detection_ignores_surrounding_whitespace() {
        let mut m = Model::default();
        m.show_placeholder();
        m.text_mut().push('\n');
        assert!(m.is_placeholder());

        m.show_result("abc");
        assert!(!m.is_placeholder());
        assert_eq!(m.style(), TextStyle::Result);
    }

    #[test]
    fn result_replaces_previous_text() {
        let mut m = Model::default();
        m.show_result("first");
        m.show_result("second");
        assert_eq!(m.text(), "second");
    }

    #[test]
    fn error_text_prefixes_status() {
        assert_eq!(error_text("boom"), "エラーが発生しました: boom");
    }
}
