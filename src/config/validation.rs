//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate bind addresses and the storage URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address for {section}: {value}")]
    InvalidBindAddress { section: &'static str, value: String },

    #[error("invalid storage URL: {value}")]
    InvalidStorageUrl { value: String },

    #[error("storage URL scheme must be http or https: {value}")]
    UnsupportedScheme { value: String },

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate the full configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_bind_address("gateway", &config.gateway.bind_address, &mut errors);
    check_bind_address("storage", &config.storage.bind_address, &mut errors);

    match Url::parse(&config.gateway.storage_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme {
                value: config.gateway.storage_url.clone(),
            });
        }
        Ok(_) => {}
        Err(_) => {
            errors.push(ValidationError::InvalidStorageUrl {
                value: config.gateway.storage_url.clone(),
            });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_bind_address(section: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            section,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.gateway.bind_address = "not-an-address".into();
        config.gateway.storage_url = "ftp://backend".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_rejects_unparseable_storage_url() {
        let mut config = AppConfig::default();
        config.gateway.storage_url = "127.0.0.1:7100".into();

        assert!(validate_config(&config).is_err());
    }
}
