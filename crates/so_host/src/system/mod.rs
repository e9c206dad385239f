use image::DynamicImage;
use so_app::ocr::Outcome;
use so_app::selection::RectI32;
use so_ocr::Recognizer;
use so_platform::{CaptureBackend, PlatformServicesError};

/// Owns the capture backend and the OCR engine for the lifetime of the app.
pub struct SystemManager {
    recognizer: Box<dyn Recognizer>,
    capture: Box<dyn CaptureBackend>,
}

impl SystemManager {
    pub fn new(recognizer: Box<dyn Recognizer>, capture: Box<dyn CaptureBackend>) -> Self {
        Self {
            recognizer,
            capture,
        }
    }

    pub fn capture(&self) -> &dyn CaptureBackend {
        self.capture.as_ref()
    }

    /// Grab `selection` from the screen.
    pub fn capture_selection(&self, selection: RectI32) -> Result<DynamicImage, SystemError> {
        tracing::debug!(?selection, "Capturing selection");
        Ok(self.capture.capture_region(selection)?)
    }

    /// Run OCR on `image` and format the fragments into display text.
    ///
    /// An empty fragment list is [`Outcome::NoText`] and never reaches the formatter.
    /// Any non-empty list yields [`Outcome::Text`], even when it formats to `""`.
    pub fn recognize_text(&self, image: &DynamicImage) -> Result<Outcome, SystemError> {
        let fragments = self.recognizer.recognize(image).map_err(SystemError::Ocr)?;
        if fragments.is_empty() {
            tracing::info!("OCR found no text");
            return Ok(Outcome::NoText);
        }

        let text = so_text::format_fragments(fragments.iter().map(|f| f.text.as_str()));
        tracing::info!(
            fragments = fragments.len(),
            chars = text.chars().count(),
            "OCR finished"
        );
        Ok(Outcome::Text { text })
    }

    /// Full pipeline for one confirmed selection. Failures are folded into the outcome.
    pub fn recognize_text_from_selection(&self, selection: RectI32) -> Outcome {
        let result = self
            .capture_selection(selection)
            .and_then(|image| self.recognize_text(&image));

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Capture/OCR failed");
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error(transparent)]
    Capture(#[from] PlatformServicesError),

    #[error("{0:#}")]
    Ocr(anyhow::Error),
}
