pub use so_host::{
    app, command_executor, constants, core_bridge, error, logging, system, view,
};

pub use so_app as core;
pub use so_host_protocol as message;
pub use so_ocr as ocr;
pub use so_platform as platform;
pub use so_settings as settings;
pub use so_text as text;
pub use so_ui as ui;

pub use so_host::{App, AppError, Command, CommandExecutor, SystemManager, ViewRequest};
