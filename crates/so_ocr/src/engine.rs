use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::DynamicImage;
use ocr_rs::OcrEngine;

use crate::types::{BoundingBox, TextFragment};

/// Detection model shared by all languages.
pub const DETECTION_MODEL: &str = "PP-OCRv5_mobile_det.mnn";

/// Default recognition language. The v5 base model reads Japanese and Latin script.
pub const DEFAULT_LANGUAGE: &str = "japanese";

/// OCR language information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrLanguageInfo {
    /// Language identifier (e.g. "japanese", "latin").
    pub id: String,
    /// Recognition model filename.
    pub rec_model: String,
    /// Charset filename.
    pub charset_file: String,
}

// (id, rec_model, charset)
const LANGUAGE_TABLE: [(&str, &str, &str); 3] = [
    ("japanese", "PP-OCRv5_mobile_rec.mnn", "ppocr_keys_v5.txt"),
    (
        "english",
        "en_PP-OCRv5_mobile_rec_infer.mnn",
        "ppocr_keys_en.txt",
    ),
    (
        "latin",
        "latin_PP-OCRv5_mobile_rec_infer.mnn",
        "ppocr_keys_latin.txt",
    ),
];

/// Host-provided OCR configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory containing the model files.
    pub models_dir: PathBuf,
    /// Language identifier.
    pub language: String,
}

impl OcrConfig {
    pub fn new(models_dir: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            models_dir: models_dir.into(),
            language: language.into(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::new(default_models_dir(), DEFAULT_LANGUAGE)
    }
}

/// `models/` next to the executable, or `./models` when that cannot be resolved.
pub fn default_models_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("models")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("models"))
}

/// Detect available OCR languages by inspecting the models directory.
pub fn get_available_languages(models_dir: &Path) -> Vec<OcrLanguageInfo> {
    LANGUAGE_TABLE
        .iter()
        .filter(|(_, rec_model, charset)| {
            // Only include languages with both files present.
            models_dir.join(rec_model).exists() && models_dir.join(charset).exists()
        })
        .map(|(id, rec_model, charset)| OcrLanguageInfo {
            id: id.to_string(),
            rec_model: rec_model.to_string(),
            charset_file: charset.to_string(),
        })
        .collect()
}

/// Resolve (detection, recognition, charset) paths for the given config.
///
/// Falls back to the first available language when the configured one is missing.
pub fn get_model_paths(config: &OcrConfig) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let det_path = config.models_dir.join(DETECTION_MODEL);

    let available_languages = get_available_languages(&config.models_dir);
    let lang_info = available_languages
        .iter()
        .find(|l| l.id == config.language)
        .or_else(|| available_languages.first())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no OCR recognition model found in {}",
                config.models_dir.display()
            )
        })?;

    if lang_info.id != config.language {
        tracing::warn!(
            requested = %config.language,
            using = %lang_info.id,
            "OCR language not available, falling back"
        );
    }

    let rec_path = config.models_dir.join(&lang_info.rec_model);
    let charset_path = config.models_dir.join(&lang_info.charset_file);

    if !det_path.exists() {
        anyhow::bail!("detection model not found: {}", det_path.display());
    }

    Ok((det_path, rec_path, charset_path))
}

/// Create an OCR engine instance.
pub fn create_engine(config: &OcrConfig) -> Result<OcrEngine> {
    let (det_path, rec_path, charset_path) = get_model_paths(config)?;

    tracing::info!(
        models_dir = %config.models_dir.display(),
        language = %config.language,
        "Loading OCR engine"
    );

    OcrEngine::new(&det_path, &rec_path, &charset_path, None)
        .map_err(|e| anyhow::anyhow!("failed to create OCR engine: {e}"))
}

/// Recognition seam: bitmap in, ordered fragments out.
pub trait Recognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextFragment>>;
}

/// [`Recognizer`] backed by a PP-OCR engine, built once and reused.
pub struct PaddleRecognizer {
    engine: OcrEngine,
}

impl PaddleRecognizer {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let engine = create_engine(config).context("OCR engine initialization failed")?;
        Ok(Self { engine })
    }
}

impl Recognizer for PaddleRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextFragment>> {
        let raw_results = self
            .engine
            .recognize(image)
            .map_err(|e| anyhow::anyhow!("OCR recognition failed: {e}"))?;

        let fragments: Vec<TextFragment> = raw_results
            .into_iter()
            .map(|r| TextFragment {
                text: r.text,
                confidence: r.confidence,
                bounding_box: BoundingBox {
                    x: r.bbox.rect.left(),
                    y: r.bbox.rect.top(),
                    width: r.bbox.rect.width() as i32,
                    height: r.bbox.rect.height() as i32,
                },
            })
            .collect();

        tracing::debug!(count = fragments.len(), "OCR produced fragments");
        Ok(fragments)
    }
}
