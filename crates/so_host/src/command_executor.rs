use std::collections::VecDeque;
use std::time::{Duration, Instant};

use so_host_protocol::Command;

use crate::app::{App, PendingCapture, ViewRequest};
use crate::constants::CAPTURE_DELAY_MS;
use crate::core_bridge;

/// Command queue.
///
/// Commands run in FIFO order; commands produced while executing are appended,
/// so nothing recurses.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        if !matches!(command, Command::None) {
            self.pending.push_back(command);
        }
    }

    pub fn push_batch(&mut self, commands: impl IntoIterator<Item = Command>) {
        for cmd in commands {
            self.push(cmd);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Run until the queue drains.
    pub fn process_all<E: CommandExecutor + ?Sized>(&mut self, executor: &mut E) {
        const MAX_ITERATIONS: usize = 1000;
        let mut iteration = 0;

        while let Some(command) = self.pending.pop_front() {
            let new_commands = executor.execute_command(command);
            self.push_batch(new_commands);

            iteration += 1;
            if iteration >= MAX_ITERATIONS {
                tracing::warn!(
                    "Command queue exceeded {MAX_ITERATIONS} iterations, dropping the rest"
                );
                self.pending.clear();
                break;
            }
        }
    }
}

pub trait CommandExecutor {
    /// Execute one command, returning any follow-up commands.
    fn execute_command(&mut self, command: Command) -> Vec<Command>;

    fn execute_command_chain(&mut self, commands: Vec<Command>) {
        let mut queue = CommandQueue::new();
        queue.push_batch(commands);
        queue.process_all(self);
    }
}

impl CommandExecutor for App {
    fn execute_command(&mut self, command: Command) -> Vec<Command> {
        match command {
            Command::Core(action) => core_bridge::dispatch(self.core_mut(), action),

            Command::MinimizeMainWindow => {
                self.push_view_request(ViewRequest::MinimizeMainWindow);
                vec![]
            }
            Command::RestoreMainWindow => {
                self.push_view_request(ViewRequest::RestoreMainWindow);
                vec![]
            }
            Command::ShowOverlay => {
                self.push_view_request(ViewRequest::ShowOverlay);
                vec![]
            }
            Command::RedrawOverlay(selection) => {
                self.push_view_request(ViewRequest::RedrawOverlay(selection));
                vec![]
            }
            Command::CloseOverlay => {
                self.push_view_request(ViewRequest::CloseOverlay);
                vec![]
            }

            Command::CaptureSelection(selection) => {
                // The overlay has to be gone before the screen is grabbed.
                let due = Instant::now() + Duration::from_millis(CAPTURE_DELAY_MS);
                self.schedule_capture(PendingCapture { selection, due });
                vec![]
            }

            Command::CopyTextToClipboard(text) => match self.clipboard().set_text(&text) {
                Ok(()) => {
                    tracing::info!(chars = text.chars().count(), "Copied text to clipboard");
                    vec![Command::Core(so_app::Action::TextCopied)]
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard write failed");
                    vec![Command::Core(so_app::Action::CopyFailed {
                        message: e.to_string(),
                    })]
                }
            },

            Command::ShowInfoMessage { title, message } => {
                self.push_view_request(ViewRequest::ShowMessage { title, message });
                vec![]
            }

            Command::ScheduleStatusReset(delay_ms) => {
                self.schedule_status_reset(Instant::now() + Duration::from_millis(delay_ms));
                vec![]
            }

            Command::SaveWindowGeometry(geometry) => {
                if let Err(e) = self.config().save_geometry(&geometry) {
                    tracing::warn!(error = %format!("{e:#}"), "Failed to save window geometry");
                } else {
                    tracing::debug!(%geometry, "Saved window geometry");
                }
                vec![]
            }

            Command::CloseWindow => {
                self.push_view_request(ViewRequest::CloseWindow);
                vec![]
            }

            Command::None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Echo {
        seen: Vec<Command>,
    }

    impl CommandExecutor for Echo {
        fn execute_command(&mut self, command: Command) -> Vec<Command> {
            let follow_up = match &command {
                Command::ShowOverlay => vec![Command::None, Command::CloseOverlay],
                _ => vec![],
            };
            self.seen.push(command);
            follow_up
        }
    }

    #[test]
    fn follow_ups_run_after_queued_commands() {
        let mut echo = Echo::default();
        echo.execute_command_chain(vec![Command::ShowOverlay, Command::MinimizeMainWindow]);
        assert_eq!(
            echo.seen,
            vec![
                Command::ShowOverlay,
                Command::MinimizeMainWindow,
                Command::CloseOverlay,
            ]
        );
    }

    #[test]
    fn none_is_never_queued() {
        let mut queue = CommandQueue::new();
        queue.push(Command::None);
        assert!(queue.is_empty());
        queue.push_batch([Command::CloseWindow, Command::None]);
        assert_eq!(queue.len(), 1);
    }

    struct Looping;

    impl CommandExecutor for Looping {
        fn execute_command(&mut self, command: Command) -> Vec<Command> {
            vec![command]
        }
    }

    #[test]
    fn runaway_chains_are_cut_off() {
        let mut queue = CommandQueue::new();
        queue.push(Command::CloseWindow);
        queue.process_all(&mut Looping);
        assert!(queue.is_empty());
    }
}
