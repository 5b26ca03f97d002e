use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Previous,
    /// Jump target, either a step name or its 1-based number
    GoTo(String),
    Restart,
    Pass,
    Fail,
    Help,
    Quit,
    /// Quit and hand the collected configuration over
    Done,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{0}' needs an argument")]
    MissingArgument(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    match cmd {
        "next" | "n" => Ok(Command::Next),
        "prev" | "previous" | "back" | "b" => Ok(Command::Previous),
        "goto" | "go" | "g" => arg
            .map(Command::GoTo)
            .ok_or_else(|| CommandError::MissingArgument(cmd.to_string())),
        "restart" | "r" => Ok(Command::Restart),
        "pass" | "ok" => Ok(Command::Pass),
        "fail" => Ok(Command::Fail),
        "help" | "h" | "?" => Ok(Command::Help),
        "q" | "quit" | "cancel" => Ok(Command::Quit),
        "wq" | "x" | "done" => Ok(Command::Done),
        "" => Err(CommandError::Unknown("empty command".to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_command("next"), Ok(Command::Next));
        assert_eq!(parse_command("n"), Ok(Command::Next));
        assert_eq!(parse_command("back"), Ok(Command::Previous));
        assert_eq!(parse_command(" prev "), Ok(Command::Previous));
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
    }

    #[test]
    fn goto_keeps_its_target() {
        assert_eq!(parse_command("goto port"), Ok(Command::GoTo("port".to_string())));
        assert_eq!(parse_command("g   4 "), Ok(Command::GoTo("4".to_string())));
    }

    #[test]
    fn goto_without_target_is_an_error() {
        assert_eq!(
            parse_command("goto"),
            Err(CommandError::MissingArgument("goto".to_string()))
        );
        assert_eq!(
            parse_command("g  "),
            Err(CommandError::MissingArgument("g".to_string()))
        );
    }

    #[test]
    fn outcome_and_exit_commands() {
        assert_eq!(parse_command("pass"), Ok(Command::Pass));
        assert_eq!(parse_command("fail"), Ok(Command::Fail));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("wq"), Ok(Command::Done));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn unknown_commands() {
        assert_eq!(
            parse_command("reboot"),
            Err(CommandError::Unknown("reboot".to_string()))
        );
        assert!(matches!(parse_command(""), Err(CommandError::Unknown(_))));
    }
}
