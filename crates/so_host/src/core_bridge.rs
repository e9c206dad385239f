use so_app::{AppModel, Effect};

use so_host_protocol::Command;

pub fn command_from_effect(effect: Effect) -> Command {
    match effect {
        Effect::MinimizeMainWindow => Command::MinimizeMainWindow,
        Effect::RestoreMainWindow => Command::RestoreMainWindow,
        Effect::ShowOverlay => Command::ShowOverlay,
        Effect::RedrawOverlay { selection } => Command::RedrawOverlay(selection),
        Effect::CloseOverlay => Command::CloseOverlay,
        Effect::CaptureSelection { selection } => Command::CaptureSelection(selection),
        Effect::CopyTextToClipboard { text } => Command::CopyTextToClipboard(text),
        Effect::ShowInfoMessage { title, message } => Command::ShowInfoMessage { title, message },
        Effect::ScheduleStatusReset { delay_ms } => Command::ScheduleStatusReset(delay_ms),
        Effect::SaveWindowGeometry { geometry } => Command::SaveWindowGeometry(geometry),
        Effect::CloseWindow => Command::CloseWindow,
    }
}

pub fn commands_from_effects(effects: impl IntoIterator<Item = Effect>) -> Vec<Command> {
    effects.into_iter().map(command_from_effect).collect()
}

pub fn dispatch(core: &mut AppModel, action: so_app::Action) -> Vec<Command> {
    commands_from_effects(core.reduce(action))
}
