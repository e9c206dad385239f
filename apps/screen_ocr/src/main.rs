#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::process::ExitCode;

fn main() -> ExitCode {
    so_host::init_logging();

    match so_host::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Screen OCR failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
