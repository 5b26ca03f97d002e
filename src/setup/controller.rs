use tracing::{debug, trace};

use super::record::ConfigurationRecord;
use super::steps::Step;

/// Single source of truth for where the wizard is and what has been entered.
///
/// Navigation never fails: `next`/`previous` stop at the ends of the
/// sequence and `go_to` accepts any step.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    current: Step,
    record: ConfigurationRecord,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller positioned on `step`, record at defaults.
    pub fn starting_at(step: Step) -> Self {
        Self {
            current: step,
            record: ConfigurationRecord::default(),
        }
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn step_index(&self) -> usize {
        self.current.index()
    }

    pub fn total_steps(&self) -> usize {
        Step::ALL.len()
    }

    pub fn progress_percent(&self) -> f64 {
        (self.step_index() + 1) as f64 / self.total_steps() as f64 * 100.0
    }

    pub fn shows_progress(&self) -> bool {
        self.current.shows_progress()
    }

    pub fn next(&mut self) {
        let index = self.step_index();
        if index < self.total_steps() - 1 {
            self.move_to(Step::from_index(index + 1).unwrap_or_default());
        } else {
            trace!("Already on the last step");
        }
    }

    pub fn previous(&mut self) {
        let index = self.step_index();
        if index > 0 {
            self.move_to(Step::from_index(index - 1).unwrap_or_default());
        } else {
            trace!("Already on the first step");
        }
    }

    pub fn go_to(&mut self, step: Step) {
        self.move_to(step);
    }

    /// Back to Welcome; entered values are kept.
    pub fn restart(&mut self) {
        self.go_to(Step::Welcome);
    }

    pub fn record(&self) -> &ConfigurationRecord {
        &self.record
    }

    pub fn set_record(&mut self, record: ConfigurationRecord) {
        self.record = record;
    }

    /// Replace the record with whatever `merge` builds from the current one.
    pub fn update_record<F>(&mut self, merge: F)
    where
        F: FnOnce(ConfigurationRecord) -> ConfigurationRecord,
    {
        let current = std::mem::take(&mut self.record);
        self.record = merge(current);
    }

    fn move_to(&mut self, step: Step) {
        debug!("Step {} -> {}", self.current, step);
        self.current = step;
    }
}
