pub mod platform_api;
pub mod traits;

pub use platform_api::*;
pub use traits::*;
