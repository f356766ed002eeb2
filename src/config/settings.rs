use crate::config::cli::CliConfig;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::Credentials;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
const DEFAULT_DELAY_SECONDS: u64 = 2;
const DEFAULT_WAIT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Runtime settings resolved from the TOML file with CLI overrides on top.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub portal: PortalSettings,
    pub input_file: PathBuf,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct PortalSettings {
    pub base_url: String,
    pub webdriver_url: String,
    pub headless: bool,
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let config = TomlConfig::from_file(&cli.config)?;
        Self::resolve(cli, config)
    }

    pub fn resolve(cli: &CliConfig, config: TomlConfig) -> Result<Self> {
        config.validate()?;

        let webdriver = config.webdriver.unwrap_or_default();
        let run = config.run.ok_or_else(|| AppError::Config {
            field: "run".to_string(),
            message: "section [run] with base_url is required".to_string(),
        })?;

        let input_file = cli
            .input
            .clone()
            .or_else(|| run.input_file.as_ref().map(PathBuf::from))
            .ok_or_else(|| AppError::Config {
                field: "run.input_file".to_string(),
                message: "no input file given (set run.input_file or pass --input)".to_string(),
            })?;

        let delay_seconds = cli
            .delay
            .or(run.delay_seconds)
            .unwrap_or(DEFAULT_DELAY_SECONDS);

        Ok(Self {
            credentials: Credentials {
                username: config.credentials.username,
                password: config.credentials.password,
                login_id: config.credentials.login_id,
            },
            portal: PortalSettings {
                base_url: run.base_url,
                webdriver_url: cli
                    .webdriver_url
                    .clone()
                    .or(webdriver.url)
                    .unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string()),
                headless: cli.headless || webdriver.headless.unwrap_or(false),
                wait_timeout: Duration::from_secs(
                    webdriver
                        .wait_timeout_seconds
                        .unwrap_or(DEFAULT_WAIT_TIMEOUT_SECONDS),
                ),
                poll_interval: Duration::from_millis(
                    webdriver.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
                ),
            },
            input_file,
            delay: Duration::from_secs(delay_seconds),
        })
    }
}
