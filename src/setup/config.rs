use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::error::Result;

const SYSTEM_CONFIG_PATH: &str = "/etc/rg110/setup.toml";
const USER_CONFIG_FILE: &str = "rg110/setup.toml";

/// Display strings for the wizard. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub general: GeneralConfig,
    pub text: TextConfig,
}

impl SetupConfig {
    /// Load the per-user file if it exists, the system-wide file otherwise.
    pub fn load() -> Result<Self> {
        let user_path = dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE));
        match user_path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Self::load_from(SYSTEM_CONFIG_PATH),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SetupConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub subtitle: String,
    /// Device model shown in the header
    pub device: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Device Setup".to_string(),
            subtitle: "Configure your tracker in a few steps".to_string(),
            device: "RG110".to_string(),
        }
    }
}

/// Body text for the presentation-only steps, rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub welcome: Vec<String>,
    pub wiring: Vec<String>,
    pub connectivity: Vec<String>,
    pub troubleshooting: Vec<String>,
    pub finish: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            welcome: lines(&[
                "This wizard will help you set up your device:",
                "",
                "  * Connect power and ignition wiring",
                "  * Point the device at your tracking server",
                "  * Choose the server port",
                "  * Check that the device comes online",
            ]),
            wiring: lines(&[
                "Red wire: +12V/24V permanent supply",
                "Black wire: ground (chassis)",
                "Yellow wire: ignition (ACC)",
                "Insert the SIM card before powering the device.",
            ]),
            connectivity: lines(&[
                "Power the device and wait about two minutes.",
                "The green LED blinks slowly once the device reaches the server.",
                "Check your tracking platform for a fresh position report.",
            ]),
            troubleshooting: lines(&[
                "Make sure the SIM card has an active data plan.",
                "Check that the SIM PIN is disabled.",
                "Verify the server address and port with your provider.",
                "Move the device to a place with better GSM reception.",
                "Double check the power and ground wiring.",
            ]),
            finish: lines(&[
                "Your device configuration is complete.",
                "Send the settings below to the device by SMS or the configurator.",
            ]),
        }
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}
