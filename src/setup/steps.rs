use tracing::warn;

/// One stage of the device setup, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Step {
    #[default]
    Welcome,
    Wiring,
    ServerSetup,
    PortSetup,
    ConnectivityTest,
    Troubleshooting,
    Finish,
}

impl Step {
    /// The fixed sequence the wizard walks through
    pub const ALL: [Step; 7] = [
        Step::Welcome,
        Step::Wiring,
        Step::ServerSetup,
        Step::PortSetup,
        Step::ConnectivityTest,
        Step::Troubleshooting,
        Step::Finish,
    ];

    pub fn index(&self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Wiring => 1,
            Step::ServerSetup => 2,
            Step::PortSetup => 3,
            Step::ConnectivityTest => 4,
            Step::Troubleshooting => 5,
            Step::Finish => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// Resolve a step from a command name or a 1-based step number.
    pub fn lookup(name: &str) -> Option<Step> {
        let name = name.trim().to_lowercase();
        if let Ok(number) = name.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|step| {
                step.command_name() == name || step.short_name().to_lowercase() == name
            })
    }

    /// Like [`Step::lookup`], but anything unrecognized lands on Welcome.
    pub fn resolve(name: &str) -> Step {
        Self::lookup(name).unwrap_or_else(|| {
            warn!("Unknown step '{}', starting at the welcome screen", name);
            Step::default()
        })
    }

    pub fn command_name(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Wiring => "wiring",
            Step::ServerSetup => "server",
            Step::PortSetup => "port",
            Step::ConnectivityTest => "test",
            Step::Troubleshooting => "troubleshooting",
            Step::Finish => "finish",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Wiring => "Wiring",
            Step::ServerSetup => "Server",
            Step::PortSetup => "Port",
            Step::ConnectivityTest => "Online Test",
            Step::Troubleshooting => "Troubleshoot",
            Step::Finish => "Finish",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Wiring => "Device Wiring",
            Step::ServerSetup => "Server Setup",
            Step::PortSetup => "Port Setup",
            Step::ConnectivityTest => "Connectivity Test",
            Step::Troubleshooting => "Troubleshooting",
            Step::Finish => "Setup Finished",
        }
    }

    /// Welcome and Finish are full-screen; everything between shows progress.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Step::Welcome | Step::Finish)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_sequence_position() {
        for (position, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), position);
            assert_eq!(Step::from_index(position), Some(*step));
        }
        assert_eq!(Step::from_index(Step::ALL.len()), None);
    }

    #[test]
    fn lookup_by_name_and_number() {
        assert_eq!(Step::lookup("port"), Some(Step::PortSetup));
        assert_eq!(Step::lookup(" Server "), Some(Step::ServerSetup));
        assert_eq!(Step::lookup("online test"), Some(Step::ConnectivityTest));
        assert_eq!(Step::lookup("1"), Some(Step::Welcome));
        assert_eq!(Step::lookup("7"), Some(Step::Finish));
        assert_eq!(Step::lookup("0"), None);
        assert_eq!(Step::lookup("8"), None);
        assert_eq!(Step::lookup("reboot"), None);
    }

    #[test]
    fn unrecognized_steps_resolve_to_welcome() {
        assert_eq!(Step::resolve("nonsense"), Step::Welcome);
        assert_eq!(Step::resolve("42"), Step::Welcome);
        assert_eq!(Step::resolve("troubleshooting"), Step::Troubleshooting);
        assert_eq!(Step::from_index(99).unwrap_or_default(), Step::Welcome);
    }

    #[test]
    fn progress_hidden_only_on_first_and_last() {
        let visible: Vec<Step> = Step::ALL
            .iter()
            .copied()
            .filter(Step::shows_progress)
            .collect();
        assert_eq!(
            visible,
            vec![
                Step::Wiring,
                Step::ServerSetup,
                Step::PortSetup,
                Step::ConnectivityTest,
                Step::Troubleshooting,
            ]
        );
    }
}
