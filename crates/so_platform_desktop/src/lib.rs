pub mod capture;
pub mod clipboard;

pub use capture::XcapCaptureBackend;
pub use clipboard::ArboardClipboard;
