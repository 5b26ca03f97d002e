mod config;
mod controller;
mod error;
mod form;
mod outcome;
mod record;
mod steps;
pub mod ui;
mod widgets;

pub use config::{GeneralConfig, SetupConfig, TextConfig};
pub use controller::WizardController;
pub use error::SetupError;
pub use form::{Field, StepForm};
pub use outcome::ConnectivityOutcome;
pub use record::{
    ConfigurationRecord, PortAnswers, ServerAddressKind, ServerAnswers, WiringAnswers,
};
pub use steps::Step;
pub use widgets::StatusBarState;

use crate::ui::Theme;
use crate::vim::{parse_command, Command, InputBuffer, ModeAction, VimMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Actions the event loop has to carry out for the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    /// Leave the wizard. `completed` is true when the operator finished the
    /// setup rather than abandoning it.
    Exit { completed: bool },
}

/// Message displayed to the user
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

/// Main setup application state
pub struct SetupApp {
    pub config: SetupConfig,
    pub theme: Theme,

    // Vim mode state
    pub vim_mode: VimMode,
    pub command_buffer: InputBuffer,

    controller: WizardController,
    pub form: StepForm,
    pub outcome: ConnectivityOutcome,

    // UI state
    pub message: Option<Message>,
    pub confirm_quit: bool,
    pub show_help: bool,
    pub status_bar: StatusBarState,
}

impl SetupApp {
    pub fn new(config: SetupConfig) -> Self {
        Self::starting_at(config, Step::Welcome)
    }

    pub fn starting_at(config: SetupConfig, step: Step) -> Self {
        let controller = WizardController::starting_at(step);
        let form = StepForm::for_step(step, controller.record());

        let mut app = Self {
            config,
            theme: Theme::default(),
            vim_mode: VimMode::Normal,
            command_buffer: InputBuffer::new(),
            controller,
            form,
            outcome: ConnectivityOutcome::Untested,
            message: None,
            confirm_quit: false,
            show_help: false,
            status_bar: StatusBarState::welcome(),
        };
        app.update_status_bar();
        app
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn current_step(&self) -> Step {
        self.controller.current_step()
    }

    pub fn record(&self) -> &ConfigurationRecord {
        self.controller.record()
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: String) {
        warn!("{}", text);
        self.message = Some(Message {
            text,
            is_error: true,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SetupAction> {
        // Clear message on any key
        self.message = None;

        if self.confirm_quit {
            let result = self.handle_confirm_key(key);
            self.update_status_bar();
            return result;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                self.show_help = false;
            }
            self.update_status_bar();
            return None;
        }

        let result = match self.vim_mode {
            VimMode::Normal => self.handle_normal_mode(key),
            VimMode::Insert => self.handle_insert_mode(key),
            VimMode::Command => self.handle_command_mode(key),
        };

        self.update_status_bar();
        result
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<SetupAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.confirm_quit = true;
            }
            return None;
        }

        let step = self.current_step();

        match key.code {
            KeyCode::Char(':') => {
                self.vim_mode = self.vim_mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Char('q') => {
                return self.request_quit();
            }

            // Field focus
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.form.focus_next();
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.form.focus_previous();
            }
            KeyCode::Char(' ') => {
                self.toggle_focused();
            }
            KeyCode::Char('i') | KeyCode::Char('a') => {
                self.enter_insert();
            }

            // Step navigation
            KeyCode::Enter => {
                self.handle_enter();
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.advance();
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
                self.navigate(WizardController::previous);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let target = c
                    .to_digit(10)
                    .and_then(|n| (n as usize).checked_sub(1))
                    .and_then(Step::from_index);
                if let Some(target) = target {
                    self.navigate(|controller| controller.go_to(target));
                }
            }

            // Step-specific keys
            KeyCode::Char('y') if step == Step::ConnectivityTest => {
                self.record_outcome(ConnectivityOutcome::Passed);
            }
            KeyCode::Char('n') if step == Step::ConnectivityTest => {
                self.record_outcome(ConnectivityOutcome::Failed);
            }
            KeyCode::Char('r') if step == Step::Finish => {
                self.restart();
            }

            _ => {}
        }
        None
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) -> Option<SetupAction> {
        match key.code {
            KeyCode::Esc => {
                self.commit_form();
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
            }
            KeyCode::Enter => {
                self.commit_form();
                self.vim_mode = self.vim_mode.transition(ModeAction::Commit);
                // Confirming the last field moves on, like submitting the step
                if self.form.is_last_focused() {
                    self.advance();
                } else {
                    self.form.focus_next();
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.commit_form();
                if key.code == KeyCode::Tab {
                    self.form.focus_next();
                } else {
                    self.form.focus_previous();
                }
                if !self.form.focused().is_some_and(|f| f.is_text()) {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Commit);
                }
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(buffer) = self.form.focused_buffer_mut() {
                    match c {
                        'u' => buffer.clear(),
                        'a' => buffer.move_start(),
                        'e' => buffer.move_end(),
                        _ => {}
                    }
                }
            }
            code => {
                if let Some(buffer) = self.form.focused_buffer_mut() {
                    match code {
                        KeyCode::Char(c) => buffer.insert(c),
                        KeyCode::Backspace => {
                            buffer.delete_back();
                        }
                        KeyCode::Delete => {
                            buffer.delete_forward();
                        }
                        KeyCode::Left => buffer.move_left(),
                        KeyCode::Right => buffer.move_right(),
                        KeyCode::Home => buffer.move_start(),
                        KeyCode::End => buffer.move_end(),
                        _ => {}
                    }
                }
            }
        }
        None
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Option<SetupAction> {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.vim_mode = self.vim_mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                return self.execute_command(&cmd);
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => {
                self.command_buffer.insert(c);
            }
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<SetupAction> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.confirm_quit = false;
                info!("Setup cancelled on step {}", self.current_step());
                return Some(SetupAction::Exit { completed: false });
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_quit = false;
            }
            _ => {}
        }
        None
    }

    fn execute_command(&mut self, input: &str) -> Option<SetupAction> {
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(e) => {
                self.set_error(e.to_string());
                return None;
            }
        };

        match command {
            Command::Next => self.advance(),
            Command::Previous => self.navigate(WizardController::previous),
            Command::GoTo(target) => match Step::lookup(&target) {
                Some(step) => self.navigate(|c| c.go_to(step)),
                None => self.set_error(SetupError::UnknownStep(target).to_string()),
            },
            Command::Restart => self.restart(),
            Command::Pass | Command::Fail if self.current_step() != Step::ConnectivityTest => {
                self.set_error("Go to the connectivity test step first".to_string());
            }
            Command::Pass => self.record_outcome(ConnectivityOutcome::Passed),
            Command::Fail => self.record_outcome(ConnectivityOutcome::Failed),
            Command::Help => self.show_help = true,
            Command::Quit => return self.request_quit(),
            Command::Done => {
                info!("Setup finished from step {}", self.current_step());
                return Some(SetupAction::Exit { completed: true });
            }
        }
        None
    }

    /// Enter on a form field edits or toggles it; elsewhere it is the step's
    /// main action.
    fn handle_enter(&mut self) {
        match self.form.focused() {
            Some(field) if field.is_text() => self.enter_insert(),
            Some(_) => self.toggle_focused(),
            None if self.current_step() == Step::Finish => self.restart(),
            None => self.advance(),
        }
    }

    /// Forward from the current step. The test step forwards by outcome.
    fn advance(&mut self) {
        if self.current_step() == Step::ConnectivityTest {
            let target = self.outcome.forward_step();
            self.navigate(|c| c.go_to(target));
        } else {
            self.navigate(WizardController::next);
        }
    }

    fn restart(&mut self) {
        self.navigate(WizardController::restart);
        self.set_info("Setup restarted, your answers were kept".to_string());
    }

    fn request_quit(&mut self) -> Option<SetupAction> {
        if self.current_step() == Step::Finish {
            info!("Setup finished");
            return Some(SetupAction::Exit { completed: true });
        }
        self.confirm_quit = true;
        None
    }

    fn navigate<F>(&mut self, transition: F)
    where
        F: FnOnce(&mut WizardController),
    {
        self.commit_form();
        let from = self.current_step();
        transition(&mut self.controller);
        let to = self.current_step();

        if from != to {
            self.form = StepForm::for_step(to, self.controller.record());
            if to == Step::ConnectivityTest {
                self.outcome = ConnectivityOutcome::Untested;
            }
            info!("Entered step {} ({}/{})", to, to.index() + 1, Step::ALL.len());
        }
    }

    fn enter_insert(&mut self) {
        if self.form.focused().is_some_and(|f| f.is_text()) {
            self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
        }
    }

    fn toggle_focused(&mut self) {
        let form = &self.form;
        self.controller.update_record(|record| form.toggle_focused(record));
    }

    fn commit_form(&mut self) {
        let form = &self.form;
        self.controller.update_record(|record| form.merge_into(record));
    }

    fn record_outcome(&mut self, outcome: ConnectivityOutcome) {
        self.outcome = outcome;
        info!("Connectivity outcome: {:?}", outcome);
        self.set_info(outcome.label().to_string());
    }

    fn update_status_bar(&mut self) {
        self.status_bar = match self.vim_mode {
            VimMode::Command => StatusBarState::command_mode(),
            VimMode::Insert => StatusBarState::form_insert(),
            VimMode::Normal => {
                StatusBarState::for_step(self.current_step(), self.form.focused(), self.outcome)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut SetupApp, code: KeyCode) -> Option<SetupAction> {
        app.handle_key(key(code))
    }

    fn clear_line(app: &mut SetupApp) {
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut SetupApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn command(app: &mut SetupApp, cmd: &str) -> Option<SetupAction> {
        press(app, KeyCode::Char(':'));
        type_text(app, cmd);
        press(app, KeyCode::Enter)
    }

    fn app_at(step: Step) -> SetupApp {
        SetupApp::starting_at(SetupConfig::default(), step)
    }

    #[test]
    fn enter_on_welcome_starts() {
        let mut app = SetupApp::new(SetupConfig::default());
        assert_eq!(app.current_step(), Step::Welcome);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Wiring);
        assert!(app.controller().shows_progress());
    }

    #[test]
    fn space_toggles_wiring_answers() {
        let mut app = app_at(Step::Wiring);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.record().sim_card_installed);
        assert!(app.record().device_located_outside);
        assert_eq!(app.current_step(), Step::Wiring);
    }

    #[test]
    fn typed_port_lands_in_record() {
        let mut app = app_at(Step::PortSetup);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.vim_mode, VimMode::Insert);

        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "8080");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.vim_mode, VimMode::Normal);
        assert_eq!(app.record().port, "8080");
        assert_eq!(app.current_step(), Step::PortSetup);
    }

    #[test]
    fn enter_on_last_field_moves_on() {
        let mut app = app_at(Step::PortSetup);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.record().port, "70151");
        assert_eq!(app.current_step(), Step::ConnectivityTest);
        assert_eq!(app.vim_mode, VimMode::Normal);
    }

    #[test]
    fn port_survives_back_and_forth() {
        let mut app = app_at(Step::PortSetup);
        press(&mut app, KeyCode::Char('i'));
        clear_line(&mut app);
        type_text(&mut app, "8080");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.current_step(), Step::ServerSetup);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_step(), Step::PortSetup);
        assert_eq!(app.record().port, "8080");
        assert_eq!(app.form.buffer(Field::Port).map(|b| b.content()), Some("8080"));
    }

    #[test]
    fn server_form_fills_address_and_password() {
        let mut app = app_at(Step::ServerSetup);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "gps.example.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.focused(), Some(Field::Password));

        press(&mut app, KeyCode::Char('i'));
        clear_line(&mut app);
        type_text(&mut app, "654321");
        press(&mut app, KeyCode::Enter);

        let record = app.record();
        assert_eq!(record.server_address_kind, ServerAddressKind::Url);
        assert_eq!(record.server_address_value, "gps.example.com");
        assert_eq!(record.password, "654321");
        assert_eq!(record.port, "7015");
        assert_eq!(app.current_step(), Step::PortSetup);
    }

    #[test]
    fn failed_test_forwards_to_troubleshooting() {
        let mut app = app_at(Step::ConnectivityTest);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.outcome, ConnectivityOutcome::Failed);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Troubleshooting);
    }

    #[test]
    fn passed_test_forwards_to_finish() {
        let mut app = app_at(Step::ConnectivityTest);
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Finish);
    }

    #[test]
    fn outcome_resets_when_test_is_entered_again() {
        let mut app = app_at(Step::ConnectivityTest);
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_step(), Step::ConnectivityTest);
        assert_eq!(app.outcome, ConnectivityOutcome::Untested);
    }

    #[test]
    fn restart_from_finish_keeps_answers() {
        let mut app = app_at(Step::Wiring);
        press(&mut app, KeyCode::Char(' '));
        let before = app.record().clone();

        command(&mut app, "goto finish");
        assert_eq!(app.current_step(), Step::Finish);
        assert!(!app.controller().shows_progress());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.current_step(), Step::Welcome);
        assert_eq!(app.record(), &before);
        assert!(app.message.as_ref().is_some_and(|m| !m.is_error));
    }

    #[test]
    fn digits_jump_to_steps() {
        let mut app = app_at(Step::Welcome);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.current_step(), Step::ConnectivityTest);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.current_step(), Step::ConnectivityTest);
    }

    #[test]
    fn unknown_goto_target_is_reported() {
        let mut app = app_at(Step::ServerSetup);
        command(&mut app, "goto reboot");
        assert_eq!(app.current_step(), Step::ServerSetup);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error && m.text.contains("reboot")));
    }

    #[test]
    fn outcome_commands_only_on_test_step() {
        let mut app = app_at(Step::PortSetup);
        command(&mut app, "pass");
        assert_eq!(app.outcome, ConnectivityOutcome::Untested);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));

        command(&mut app, "next");
        command(&mut app, "fail");
        assert_eq!(app.outcome, ConnectivityOutcome::Failed);
    }

    #[test]
    fn quitting_asks_first() {
        let mut app = app_at(Step::ServerSetup);
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        assert!(app.confirm_quit);
        assert_eq!(press(&mut app, KeyCode::Char('n')), None);
        assert!(!app.confirm_quit);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(
            press(&mut app, KeyCode::Char('y')),
            Some(SetupAction::Exit { completed: false })
        );
    }

    #[test]
    fn quitting_on_finish_completes() {
        let mut app = app_at(Step::Finish);
        assert_eq!(
            press(&mut app, KeyCode::Char('q')),
            Some(SetupAction::Exit { completed: true })
        );
        let mut app = app_at(Step::PortSetup);
        assert_eq!(command(&mut app, "wq"), Some(SetupAction::Exit { completed: true }));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app_at(Step::Wiring);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_step(), Step::Wiring);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn status_bar_follows_mode() {
        let mut app = app_at(Step::PortSetup);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.status_bar.left_hint, StatusBarState::form_insert().left_hint);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char(':'));
        assert_eq!(app.status_bar.right_hint, StatusBarState::command_mode().right_hint);
    }
}
