/// OCR lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No OCR work in progress.
    #[default]
    Idle,
    /// A selection was confirmed; capture and recognition are pending or running.
    Running,
}

/// Result of one capture + recognition run, as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Recognition produced fragments; `text` is the formatted result.
    Text { text: String },
    /// Recognition ran but produced no fragments.
    NoText,
    /// Capture or recognition failed.
    Failed { message: String },
}

/// Minimal OCR model.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
}

impl Model {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn start(&mut self) {
        self.phase = Phase::Running;
    }

    pub fn finish(&mut self) {
        self.phase = Phase::Idle;
    }
}
