use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{CONFIG_FILE_NAME, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSetting {
    pub base_url: String,
    pub timeout_in_millis: u64,
}

impl ApiSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSetting {
    pub api: ApiSetting,
}

impl ClientSetting {
    /// Load settings from defaults, an optional `signin.toml`, a `.env`
    /// file and `SIGNIN__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let settings = Self::builder()?
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Parse settings from a TOML document layered over the defaults.
    pub fn from_toml(document: &str) -> Result<Self, SettingsError> {
        let settings = Self::builder()?
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.base_url", prod::api::BASE_URL)?
            .set_default("api.timeout_in_millis", prod::api::TIMEOUT_IN_MILLIS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = ClientSetting::from_toml("").unwrap();

        assert_eq!(settings.api.base_url, prod::api::BASE_URL);
        assert_eq!(settings.api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = ClientSetting::from_toml(
            r#"
            [api]
            base_url = "https://auth.example.com/app/"
            timeout_in_millis = 200
            "#,
        )
        .unwrap();

        assert_eq!(settings.api.base_url, "https://auth.example.com/app/");
        assert_eq!(
            settings.api.timeout(),
            Duration::from_millis(crate::config::constants::test::api::TIMEOUT_IN_MILLIS)
        );
    }

    #[test]
    fn wrong_type_is_an_error() {
        let result = ClientSetting::from_toml(
            r#"
            [api]
            timeout_in_millis = "soon"
            "#,
        );

        assert!(matches!(result, Err(SettingsError::Load(_))));
    }
}
