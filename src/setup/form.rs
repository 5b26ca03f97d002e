use super::record::{ConfigurationRecord, PortAnswers, WiringAnswers};
use super::steps::Step;
use crate::vim::InputBuffer;

/// An editable item on one of the data-entry steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SimCard,
    Outside,
    AddressKind,
    AddressValue,
    Password,
    Port,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::SimCard => "SIM card installed",
            Field::Outside => "Device mounted outside",
            Field::AddressKind => "Address type",
            Field::AddressValue => "Server",
            Field::Password => "Password",
            Field::Port => "Port",
        }
    }

    /// Text fields are edited in insert mode, the rest flip with Space.
    pub fn is_text(&self) -> bool {
        matches!(self, Field::AddressValue | Field::Password | Field::Port)
    }
}

const WIRING_FIELDS: &[Field] = &[Field::SimCard, Field::Outside];
const SERVER_FIELDS: &[Field] = &[Field::AddressKind, Field::AddressValue, Field::Password];
const PORT_FIELDS: &[Field] = &[Field::Port];

pub fn fields_for(step: Step) -> &'static [Field] {
    match step {
        Step::Wiring => WIRING_FIELDS,
        Step::ServerSetup => SERVER_FIELDS,
        Step::PortSetup => PORT_FIELDS,
        _ => &[],
    }
}

/// Edit state for the step on screen.
///
/// Buffers are seeded from the record when the step is entered and merged
/// back into it on commit; only the fields the step owns are written.
pub struct StepForm {
    step: Step,
    focus: usize,
    address: InputBuffer,
    password: InputBuffer,
    port: InputBuffer,
}

impl StepForm {
    pub fn for_step(step: Step, record: &ConfigurationRecord) -> Self {
        Self {
            step,
            focus: 0,
            address: InputBuffer::with_content(&record.server_address_value, false),
            password: InputBuffer::with_content(&record.password, true),
            port: InputBuffer::with_content(&record.port, false),
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        fields_for(self.step)
    }

    pub fn focused(&self) -> Option<Field> {
        self.fields().get(self.focus).copied()
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused() == Some(field)
    }

    pub fn is_last_focused(&self) -> bool {
        self.focus + 1 >= self.fields().len()
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.fields().len() {
            self.focus += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn buffer(&self, field: Field) -> Option<&InputBuffer> {
        match field {
            Field::AddressValue => Some(&self.address),
            Field::Password => Some(&self.password),
            Field::Port => Some(&self.port),
            _ => None,
        }
    }

    pub fn focused_buffer_mut(&mut self) -> Option<&mut InputBuffer> {
        match self.focused()? {
            Field::AddressValue => Some(&mut self.address),
            Field::Password => Some(&mut self.password),
            Field::Port => Some(&mut self.port),
            _ => None,
        }
    }

    /// Flip the focused toggle; text fields leave the record as it is.
    pub fn toggle_focused(&self, record: ConfigurationRecord) -> ConfigurationRecord {
        match self.focused() {
            Some(Field::SimCard) => {
                let answers = record.wiring();
                record.with_wiring(WiringAnswers {
                    sim_card_installed: !answers.sim_card_installed,
                    ..answers
                })
            }
            Some(Field::Outside) => {
                let answers = record.wiring();
                record.with_wiring(WiringAnswers {
                    device_located_outside: !answers.device_located_outside,
                    ..answers
                })
            }
            Some(Field::AddressKind) => {
                let mut answers = record.server();
                answers.kind = answers.kind.toggled();
                record.with_server(answers)
            }
            _ => record,
        }
    }

    /// Write this step's text buffers into `record`.
    pub fn merge_into(&self, record: ConfigurationRecord) -> ConfigurationRecord {
        match self.step {
            Step::ServerSetup => {
                let mut answers = record.server();
                answers.value = self.address.content().to_string();
                answers.password = self.password.content().to_string();
                record.with_server(answers)
            }
            Step::PortSetup => record.with_port(PortAnswers {
                port: self.port.content().to_string(),
            }),
            _ => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::record::ServerAddressKind;

    #[test]
    fn presentation_steps_have_no_fields() {
        for step in [
            Step::Welcome,
            Step::ConnectivityTest,
            Step::Troubleshooting,
            Step::Finish,
        ] {
            let form = StepForm::for_step(step, &ConfigurationRecord::default());
            assert!(form.fields().is_empty());
            assert_eq!(form.focused(), None);
        }
    }

    #[test]
    fn focus_stays_within_fields() {
        let mut form = StepForm::for_step(Step::ServerSetup, &ConfigurationRecord::default());
        assert_eq!(form.focused(), Some(Field::AddressKind));
        form.focus_previous();
        assert_eq!(form.focused(), Some(Field::AddressKind));

        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Some(Field::Password));
        assert!(form.is_last_focused());
    }

    #[test]
    fn buffers_start_from_the_record() {
        let record = ConfigurationRecord::default();
        let form = StepForm::for_step(Step::PortSetup, &record);
        assert_eq!(form.buffer(Field::Port).map(|b| b.content()), Some("7015"));
        assert!(form.buffer(Field::Password).is_some_and(|b| b.is_masked()));
        assert!(form.buffer(Field::SimCard).is_none());
    }

    #[test]
    fn toggles_flip_only_their_field() {
        let mut form = StepForm::for_step(Step::Wiring, &ConfigurationRecord::default());
        let record = form.toggle_focused(ConfigurationRecord::default());
        assert!(record.sim_card_installed);
        assert!(!record.device_located_outside);

        form.focus_next();
        let record = form.toggle_focused(record);
        assert!(record.sim_card_installed);
        assert!(record.device_located_outside);
        assert_eq!(record.port, "7015");
    }

    #[test]
    fn address_kind_toggle_keeps_value() {
        let mut record = ConfigurationRecord::default();
        record.server_address_value = "10.0.0.1".to_string();
        let form = StepForm::for_step(Step::ServerSetup, &record);

        let record = form.toggle_focused(record);
        assert_eq!(record.server_address_kind, ServerAddressKind::Url);
        assert_eq!(record.server_address_value, "10.0.0.1");
    }

    #[test]
    fn merge_writes_owned_fields_only() {
        let mut record = ConfigurationRecord::default();
        record.sim_card_installed = true;

        let mut form = StepForm::for_step(Step::ServerSetup, &record);
        form.focus_next();
        if let Some(buffer) = form.focused_buffer_mut() {
            buffer.set("gps.example.com");
        }

        let merged = form.merge_into(record.clone());
        assert_eq!(merged.server_address_value, "gps.example.com");
        assert_eq!(merged.password, "123456");
        assert_eq!(merged.port, record.port);
        assert!(merged.sim_card_installed);
    }

    #[test]
    fn merge_on_wiring_changes_nothing() {
        let record = ConfigurationRecord::default();
        let form = StepForm::for_step(Step::Wiring, &record);
        assert_eq!(form.merge_into(record.clone()), record);
    }
}
