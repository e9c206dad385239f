pub mod app;
pub mod command_executor;
pub mod constants;
pub mod core_bridge;
pub mod error;
pub mod logging;
pub mod system;
pub mod view;

mod run;

pub use app::{App, ViewRequest};
pub use command_executor::{CommandExecutor, CommandQueue};
pub use error::{AppError, AppResult};
pub use logging::init_logging;
pub use run::run;
pub use so_host_protocol::Command;
pub use system::{SystemError, SystemManager};
