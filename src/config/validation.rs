//! Configuration validation
//!
//! Checks a loaded configuration and reports every problem at once:
//! - API URL present and http(s)
//! - Non-empty User-Agent
//! - Non-zero timeout and concurrency

use super::techstack_config::TechStackConfig;
use crate::TechStackError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a techstack configuration
pub fn validate_config(config: &TechStackConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let api_url = config.api_url.trim();
    if api_url.is_empty() {
        errors.push(ValidationError::new("api_url", "API URL cannot be empty"));
    } else if !api_url.starts_with("https://") && !api_url.starts_with("http://") {
        errors.push(ValidationError::new(
            "api_url",
            format!("API URL must start with http:// or https://: {}", api_url),
        ));
    }

    if config.user_agent.trim().is_empty() {
        errors.push(ValidationError::new(
            "user_agent",
            "User-Agent cannot be empty (GitHub rejects anonymous agents)",
        ));
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "request_timeout_secs",
            "Timeout must be at least 1 second",
        ));
    }

    if config.max_concurrent_requests == 0 {
        errors.push(ValidationError::new(
            "max_concurrent_requests",
            "At least one request must be allowed in flight",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and convert to the crate error type
pub fn validate_config_result(config: &TechStackConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        TechStackError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TechStackConfig::new()).is_ok());
    }

    #[test]
    fn test_invalid_api_url() {
        let mut config = TechStackConfig::new();
        config.api_url = "ftp://github.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "api_url");
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = TechStackConfig::new();
        config.api_url = String::new();
        config.user_agent = " ".to_string();
        config.request_timeout_secs = 0;
        config.max_concurrent_requests = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_config_result_message() {
        let mut config = TechStackConfig::new();
        config.max_concurrent_requests = 0;

        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("max_concurrent_requests"));
    }
}
