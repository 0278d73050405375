//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect contradictory settings (wildcard origin with credentials)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: PortfolioConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::PortfolioConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("document.path must not be empty")]
    EmptyDocumentPath,

    #[error("cors.allowed_origins must not be empty when cors is enabled")]
    NoCorsOrigins,

    #[error("cors.allowed_origins entry '{0}' is not a valid origin")]
    InvalidOrigin(String),

    #[error("cors.allow_credentials cannot be combined with a wildcard origin")]
    CredentialsWithWildcard,

    #[error("contact.webhook_url must be set when contact is enabled")]
    MissingWebhookUrl,

    #[error("contact.webhook_url '{0}' is not a valid http(s) URL")]
    InvalidWebhookUrl(String),

    #[error("contact timeouts must be greater than zero")]
    ZeroContactTimeout,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a deserialized configuration, collecting every violation.
pub fn validate_config(config: &PortfolioConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.document.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDocumentPath);
    }

    if config.cors.enabled {
        validate_cors(config, &mut errors);
    }

    if config.contact.enabled {
        validate_contact(config, &mut errors);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_cors(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    let origins = &config.cors.allowed_origins;

    if origins.is_empty() {
        errors.push(ValidationError::NoCorsOrigins);
        return;
    }

    let has_wildcard = origins.iter().any(|o| o == "*");
    if has_wildcard && config.cors.allow_credentials {
        errors.push(ValidationError::CredentialsWithWildcard);
    }

    for origin in origins.iter().filter(|o| o.as_str() != "*") {
        // An origin is scheme://host[:port] with no path component.
        match Url::parse(origin) {
            Ok(url) if url.path() == "/" && !url.cannot_be_a_base() => {}
            _ => errors.push(ValidationError::InvalidOrigin(origin.clone())),
        }
    }
}

fn validate_contact(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    let contact = &config.contact;

    if contact.webhook_url.is_empty() {
        errors.push(ValidationError::MissingWebhookUrl);
    } else {
        match Url::parse(&contact.webhook_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidWebhookUrl(
                contact.webhook_url.clone(),
            )),
        }
    }

    if contact.connect_timeout_secs == 0 || contact.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroContactTimeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PortfolioConfig::default()).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let mut config = PortfolioConfig::default();
        config.listener.bind_address = "nope".to_string();
        config.timeouts.request_secs = 0;
        config.security.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
    }

    #[test]
    fn wildcard_origin_rejects_credentials() {
        let mut config = PortfolioConfig::default();
        config.cors.allow_credentials = true;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::CredentialsWithWildcard]);
    }

    #[test]
    fn origin_with_path_is_rejected() {
        let mut config = PortfolioConfig::default();
        config.cors.allowed_origins = vec!["https://example.com/app".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidOrigin(
                "https://example.com/app".to_string()
            )]
        );
    }

    #[test]
    fn enabled_contact_requires_a_webhook() {
        let mut config = PortfolioConfig::default();
        config.contact.enabled = true;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingWebhookUrl]);
    }

    #[test]
    fn webhook_must_be_http() {
        let mut config = PortfolioConfig::default();
        config.contact.enabled = true;
        config.contact.webhook_url = "ftp://hooks.example.com/send".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidWebhookUrl(
                "ftp://hooks.example.com/send".to_string()
            )]
        );
    }
}
