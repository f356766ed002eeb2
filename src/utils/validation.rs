use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::Config {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::Config {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::Config {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_nonempty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Config {
            field: field_name.to_string(),
            message: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AppError::Config {
            field: field_name.to_string(),
            message: format!("value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_url() {
        assert!(validate_url("webdriver.url", "").is_err());
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(validate_url("webdriver.url", "ftp://host").is_err());
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("webdriver.url", "http://localhost:4444").is_ok());
        assert!(validate_url("run.base_url", "https://fleet.example.com").is_ok());
    }

    #[test]
    fn rejects_blank_credential() {
        assert!(validate_nonempty("credentials.username", "  ").is_err());
        assert!(validate_nonempty("credentials.username", "ops").is_ok());
    }
}
