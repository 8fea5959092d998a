use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Source section exists (enforced by serde)
/// - Source base URL is not empty
/// - Server port is not 0
/// - Browse page size is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.source.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "source.base_url cannot be empty".to_string(),
        ));
    }

    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.browse.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "browse.page_size cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HttpSourceConfig;
    use crate::config::{BrowseConfig, ServerConfig};

    fn valid_config() -> Config {
        Config {
            source: HttpSourceConfig {
                base_url: "https://example.com/shows".to_string(),
                timeout_secs: 30,
            },
            server: ServerConfig::default(),
            browse: BrowseConfig::default(),
            genres: None,
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = valid_config();
        config.source.base_url = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = valid_config();
        config.server.port = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_rejects_page_size_zero() {
        let mut config = valid_config();
        config.browse.page_size = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
