#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VimMode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl VimMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            VimMode::Normal => "NORMAL",
            VimMode::Insert => "INSERT",
            VimMode::Command => "COMMAND",
        }
    }

    /// Insert mode is only reachable from Normal; Command returns to Normal on
    /// both escape and execute.
    pub fn transition(&self, action: ModeAction) -> VimMode {
        match (self, action) {
            (VimMode::Normal, ModeAction::EnterInsert) => VimMode::Insert,
            (VimMode::Normal, ModeAction::EnterCommand) => VimMode::Command,
            (VimMode::Insert, ModeAction::Escape) => VimMode::Normal,
            (VimMode::Insert, ModeAction::Commit) => VimMode::Normal,
            (VimMode::Command, ModeAction::Escape) => VimMode::Normal,
            (VimMode::Command, ModeAction::Execute) => VimMode::Normal,
            _ => *self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    EnterInsert,
    EnterCommand,
    Escape,
    /// Leave insert mode keeping the edited value
    Commit,
    Execute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_enters_insert_and_command() {
        assert_eq!(VimMode::Normal.transition(ModeAction::EnterInsert), VimMode::Insert);
        assert_eq!(VimMode::Normal.transition(ModeAction::EnterCommand), VimMode::Command);
    }

    #[test]
    fn insert_cannot_jump_to_command() {
        assert_eq!(VimMode::Insert.transition(ModeAction::EnterCommand), VimMode::Insert);
        assert_eq!(VimMode::Insert.transition(ModeAction::Commit), VimMode::Normal);
    }

    #[test]
    fn command_returns_to_normal() {
        assert_eq!(VimMode::Command.transition(ModeAction::Execute), VimMode::Normal);
        assert_eq!(VimMode::Command.transition(ModeAction::Escape), VimMode::Normal);
        assert_eq!(VimMode::Command.transition(ModeAction::EnterInsert), VimMode::Command);
    }
}
