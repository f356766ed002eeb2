use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Credentials support `${VAR}` environment substitution
/// so secrets need not live in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub credentials: CredentialsConfig,
    pub webdriver: Option<WebDriverConfig>,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
    pub login_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebDriverConfig {
    pub url: Option<String>,
    pub headless: Option<bool>,
    pub wait_timeout_seconds: Option<u64>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub base_url: String,
    pub input_file: Option<String>,
    pub delay_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AppError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_nonempty("credentials.username", &self.credentials.username)?;
        validation::validate_nonempty("credentials.password", &self.credentials.password)?;
        validation::validate_nonempty("credentials.login_id", &self.credentials.login_id)?;

        if let Some(webdriver) = &self.webdriver {
            if let Some(url) = &webdriver.url {
                validation::validate_url("webdriver.url", url)?;
            }
            if let Some(timeout) = webdriver.wait_timeout_seconds {
                validation::validate_positive_number("webdriver.wait_timeout_seconds", timeout, 1)?;
            }
        }

        if let Some(run) = &self.run {
            validation::validate_url("run.base_url", &run.base_url)?;
        } else {
            return Err(AppError::Config {
                field: "run".to_string(),
                message: "section [run] with base_url is required".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [credentials]
        username = "ops-user"
        password = "secret"
        login_id = "STATION-7"

        [webdriver]
        url = "http://localhost:4444"
        headless = true

        [run]
        base_url = "https://fleet.example.com/login"
        input_file = "mvas.csv"
        delay_seconds = 3
    "#;

    #[test]
    fn parses_full_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.credentials.username, "ops-user");
        assert_eq!(config.webdriver.as_ref().unwrap().headless, Some(true));
        assert_eq!(config.run.as_ref().unwrap().delay_seconds, Some(3));
        config.validate().unwrap();
    }

    #[test]
    fn substitutes_env_vars() {
        std::env::set_var("WORKITEM_TEST_PASSWORD", "from-env");
        let content = r#"
            [credentials]
            username = "ops-user"
            password = "${WORKITEM_TEST_PASSWORD}"
            login_id = "STATION-7"

            [run]
            base_url = "https://fleet.example.com/login"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.credentials.password, "from-env");
    }

    #[test]
    fn unset_env_var_is_left_verbatim() {
        let content = r#"
            [credentials]
            username = "ops-user"
            password = "${WORKITEM_TEST_UNSET_VAR}"
            login_id = "STATION-7"

            [run]
            base_url = "https://fleet.example.com/login"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.credentials.password, "${WORKITEM_TEST_UNSET_VAR}");
    }

    #[test]
    fn missing_run_section_fails_validation() {
        let content = r#"
            [credentials]
            username = "ops-user"
            password = "secret"
            login_id = "STATION-7"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_credential_fails_validation() {
        let content = r#"
            [credentials]
            username = ""
            password = "secret"
            login_id = "STATION-7"

            [run]
            base_url = "https://fleet.example.com/login"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }
}
