use crate::setup::form::Field;
use crate::setup::outcome::ConnectivityOutcome;
use crate::setup::steps::Step;

/// Dynamic status bar hints, refreshed after every key
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Left side hint text (e.g., "Space: toggle  j/k: fields")
    pub left_hint: String,
    /// Right side hint text (e.g., "l: next  h: back")
    pub right_hint: String,
}

impl StatusBarState {
    fn new(left: &str, right: &str) -> Self {
        Self {
            left_hint: left.to_string(),
            right_hint: right.to_string(),
        }
    }

    pub fn welcome() -> Self {
        Self::new("", "Enter: start setup  :help")
    }

    /// Hints for a form step in normal mode, depending on the focused field
    pub fn form_normal(field: Option<Field>) -> Self {
        match field {
            Some(f) if f.is_text() => Self::new("j/k: fields  i: edit", "l: next  h: back"),
            Some(_) => Self::new("j/k: fields  Space: toggle", "l: next  h: back"),
            None => Self::new("", "l: next  h: back"),
        }
    }

    pub fn form_insert() -> Self {
        Self::new("Type to enter text", "Esc: normal  Enter: confirm")
    }

    pub fn connectivity(outcome: ConnectivityOutcome) -> Self {
        let right = match outcome {
            ConnectivityOutcome::Untested => "Enter: troubleshoot  h: back",
            ConnectivityOutcome::Passed => "Enter: finish  h: back",
            ConnectivityOutcome::Failed => "Enter: troubleshoot  h: back",
        };
        Self::new("y: online  n: offline", right)
    }

    pub fn troubleshooting() -> Self {
        Self::new("Check each item", "Enter: finish  h: back")
    }

    pub fn finish() -> Self {
        Self::new("Setup complete!", "r: restart  q: quit")
    }

    pub fn command_mode() -> Self {
        Self::new("", "Enter: run  Esc: cancel")
    }

    /// Hints for whatever step is on screen
    pub fn for_step(step: Step, field: Option<Field>, outcome: ConnectivityOutcome) -> Self {
        match step {
            Step::Welcome => Self::welcome(),
            Step::Wiring | Step::ServerSetup | Step::PortSetup => Self::form_normal(field),
            Step::ConnectivityTest => Self::connectivity(outcome),
            Step::Troubleshooting => Self::troubleshooting(),
            Step::Finish => Self::finish(),
        }
    }
}
