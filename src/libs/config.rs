//! Application configuration.
//!
//! Stored as pretty-printed JSON in the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or section
//! falls back to the defaults below.
//!
//! ```json
//! {
//!   "auth": { "login_delay_ms": 1000, "accounts": [] },
//!   "attendance": { "good_threshold": 80, "warning_threshold": 70 },
//!   "session": { "seed_sample_data": true }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::role::Role;
use crate::store::seed;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// A login pair for one role. Demo data, not a credential store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub role: Role,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthConfig {
    /// Simulated sign-in latency.
    pub login_delay_ms: u64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            login_delay_ms: 1000,
            accounts: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttendanceConfig {
    /// Minimum percentage for the good band.
    pub good_threshold: u32,

    /// Minimum percentage for the warning band; anything lower is danger.
    pub warning_threshold: u32,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        AttendanceConfig {
            good_threshold: 80,
            warning_threshold: 70,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub seed_sample_data: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { seed_sample_data: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()).to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Accounts accepted at login; the demo table when none are configured.
    pub fn accounts(&self) -> Vec<Account> {
        match &self.auth {
            Some(auth) if !auth.accounts.is_empty() => auth.accounts.clone(),
            _ => seed::demo_accounts(),
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.auth.clone().unwrap_or_default().login_delay_ms)
    }

    pub fn attendance(&self) -> AttendanceConfig {
        self.attendance.clone().unwrap_or_default()
    }

    pub fn seed_sample_data(&self) -> bool {
        self.session.clone().unwrap_or_default().seed_sample_data
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "auth".to_string(),
                name: Message::ConfigModuleAuth.to_string(),
            },
            ConfigModule {
                key: "attendance".to_string(),
                name: Message::ConfigModuleAttendance.to_string(),
            },
            ConfigModule {
                key: "session".to_string(),
                name: Message::ConfigModuleSession.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "auth" => {
                    let default = config.auth.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAuth);
                    let login_delay_ms = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptLoginDelay.to_string())
                        .default(default.login_delay_ms)
                        .interact_text()?;
                    let store_demo = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStoreDemoAccounts.to_string())
                        .default(!default.accounts.is_empty())
                        .interact()?;
                    config.auth = Some(AuthConfig {
                        login_delay_ms,
                        accounts: if store_demo { seed::demo_accounts() } else { Vec::new() },
                    });
                }
                "attendance" => {
                    let default = config.attendance.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAttendance);
                    let good_threshold: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptGoodThreshold.to_string())
                        .default(default.good_threshold)
                        .interact_text()?;
                    let warning_threshold: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWarningThreshold.to_string())
                        .default(default.warning_threshold)
                        .interact_text()?;
                    if warning_threshold > good_threshold || good_threshold > 100 {
                        msg_bail_anyhow!(Message::ThresholdOrder);
                    }
                    config.attendance = Some(AttendanceConfig {
                        good_threshold,
                        warning_threshold,
                    });
                }
                "session" => {
                    let default = config.session.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSession);
                    config.session = Some(SessionConfig {
                        seed_sample_data: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSeedSampleData.to_string())
                            .default(default.seed_sample_data)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
