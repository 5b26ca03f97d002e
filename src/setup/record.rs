use serde::{Deserialize, Serialize};

pub const DEFAULT_PASSWORD: &str = "123456";
pub const DEFAULT_PORT: &str = "7015";

/// How the tracking server is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServerAddressKind {
    #[default]
    #[serde(rename = "ip")]
    IpAddress,
    #[serde(rename = "url")]
    Url,
}

impl ServerAddressKind {
    pub fn label(&self) -> &'static str {
        match self {
            ServerAddressKind::IpAddress => "IP address",
            ServerAddressKind::Url => "URL",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ServerAddressKind::IpAddress => ServerAddressKind::Url,
            ServerAddressKind::Url => ServerAddressKind::IpAddress,
        }
    }
}

/// Everything the operator has entered so far.
///
/// Fields are independent: nothing here checks the port is numeric or that
/// the address matches its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub server_address_kind: ServerAddressKind,
    pub server_address_value: String,
    pub password: String,
    pub port: String,
    pub sim_card_installed: bool,
    pub device_located_outside: bool,
}

impl Default for ConfigurationRecord {
    fn default() -> Self {
        Self {
            server_address_kind: ServerAddressKind::IpAddress,
            server_address_value: String::new(),
            password: DEFAULT_PASSWORD.to_string(),
            port: DEFAULT_PORT.to_string(),
            sim_card_installed: false,
            device_located_outside: false,
        }
    }
}

/// Fields owned by the wiring step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WiringAnswers {
    pub sim_card_installed: bool,
    pub device_located_outside: bool,
}

/// Fields owned by the server step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerAnswers {
    pub kind: ServerAddressKind,
    pub value: String,
    pub password: String,
}

/// Field owned by the port step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortAnswers {
    pub port: String,
}

impl ConfigurationRecord {
    pub fn wiring(&self) -> WiringAnswers {
        WiringAnswers {
            sim_card_installed: self.sim_card_installed,
            device_located_outside: self.device_located_outside,
        }
    }

    pub fn server(&self) -> ServerAnswers {
        ServerAnswers {
            kind: self.server_address_kind,
            value: self.server_address_value.clone(),
            password: self.password.clone(),
        }
    }

    pub fn port_answers(&self) -> PortAnswers {
        PortAnswers {
            port: self.port.clone(),
        }
    }

    pub fn with_wiring(self, answers: WiringAnswers) -> Self {
        Self {
            sim_card_installed: answers.sim_card_installed,
            device_located_outside: answers.device_located_outside,
            ..self
        }
    }

    pub fn with_server(self, answers: ServerAnswers) -> Self {
        Self {
            server_address_kind: answers.kind,
            server_address_value: answers.value,
            password: answers.password,
            ..self
        }
    }

    pub fn with_port(self, answers: PortAnswers) -> Self {
        Self {
            port: answers.port,
            ..self
        }
    }

    /// TOML document handed to whatever applies the settings to the device.
    pub fn to_toml(&self) -> Result<String, super::error::SetupError> {
        Ok(toml::to_string(self)?)
    }
}
