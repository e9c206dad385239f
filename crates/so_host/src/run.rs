use std::time::Instant;

use eframe::egui;
use so_ocr::{OcrConfig, PaddleRecognizer};
use so_platform_desktop::{ArboardClipboard, XcapCaptureBackend};
use so_settings::ConfigManager;
use so_settings::defaults::MIN_WINDOW_SIZE;
use so_ui::theme::main_window::TITLE;

use crate::app::App;
use crate::constants::APP_ID;
use crate::error::{AppError, AppResult};
use crate::system::SystemManager;
use crate::view::ScreenOcrApp;

fn create_app() -> AppResult<App> {
    let ocr_config = OcrConfig::new(so_ocr::default_models_dir(), so_ocr::DEFAULT_LANGUAGE);
    let recognizer = PaddleRecognizer::new(&ocr_config)
        .map_err(|e| AppError::Init(format!("OCRエンジンの初期化に失敗しました: {e:#}")))?;

    let system = SystemManager::new(Box::new(recognizer), Box::new(XcapCaptureBackend::new()));
    match system.capture().screen_size() {
        Ok(size) => tracing::info!(width = size.width, height = size.height, "Primary display"),
        Err(e) => tracing::warn!(error = %e, "Could not query the primary display"),
    }

    Ok(App::new(
        system,
        Box::new(ArboardClipboard::new()),
        ConfigManager::new(),
        Instant::now(),
    ))
}

pub fn run() -> AppResult<()> {
    let app = create_app()?;
    let geometry = app.config().initial_geometry();
    tracing::debug!(%geometry, "Opening main window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([geometry.width as f32, geometry.height as f32])
            .with_min_inner_size([MIN_WINDOW_SIZE.0 as f32, MIN_WINDOW_SIZE.1 as f32])
            .with_position([geometry.x as f32, geometry.y as f32])
            .with_transparent(true),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ScreenOcrApp::new(cc, app)))),
    )
    .map_err(|e| AppError::Ui(e.to_string()))
}
