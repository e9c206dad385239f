use std::path::PathBuf;

/// Geometry used when nothing usable was persisted.
pub const DEFAULT_GEOMETRY: &str = "800x600+100+100";

/// Minimum main window size (width, height).
pub const MIN_WINDOW_SIZE: (u32, u32) = (800, 600);

pub const CONFIG_DIR_NAME: &str = ".screen_ocr";
pub const CONFIG_FILE_NAME: &str = "window_config.json";

/// Base directory for the config folder.
pub fn default_base_dir() -> PathBuf {
    // Prefer a user home directory.
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir;
    }

    // Fallback: program directory.
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_path_buf();
    }

    // Last resort: cwd.
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    default_base_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
