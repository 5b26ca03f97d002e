use super::steps::Step;

/// Result of the connectivity check as reported by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityOutcome {
    #[default]
    Untested,
    Passed,
    Failed,
}

impl ConnectivityOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityOutcome::Untested => "Not checked yet",
            ConnectivityOutcome::Passed => "Device is online",
            ConnectivityOutcome::Failed => "Device did not come online",
        }
    }

    /// Where the test step leads. Only a confirmed pass skips troubleshooting.
    pub fn forward_step(&self) -> Step {
        match self {
            ConnectivityOutcome::Passed => Step::Finish,
            ConnectivityOutcome::Untested | ConnectivityOutcome::Failed => Step::Troubleshooting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pass_skips_troubleshooting() {
        assert_eq!(ConnectivityOutcome::Passed.forward_step(), Step::Finish);
        assert_eq!(ConnectivityOutcome::Failed.forward_step(), Step::Troubleshooting);
        assert_eq!(ConnectivityOutcome::default().forward_step(), Step::Troubleshooting);
    }
}
