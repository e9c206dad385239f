pub mod defaults;
pub mod geometry;
pub mod manager;
pub mod window_config;

pub use geometry::{GeometryParseError, WindowGeometry};
pub use manager::ConfigManager;
pub use window_config::WindowConfig;
