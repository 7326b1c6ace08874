//! Configuration validation integration tests
//!
//! Loading from YAML files and validating the result.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, test_secret};
    use rafiq_auth::config::validation::{self, MIN_SECRET_LEN};
    use rafiq_auth::{AuthError, AuthService, Config, SharedSecret, Validate};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A complete file yields a working service
    #[test]
    fn test_file_to_service() {
        let file = write_config(&format!(
            "auth:\n  secret: \"{}\"\n  issuer: \"staging.rafiq.com\"\n  passcode_step_secs: 60\n  passcode_ttl_secs: 120\n",
            test_secret().to_base64()
        ));

        let config = Config::from_file(file.path()).unwrap();
        config.validate().unwrap();
        let service = AuthService::new(config.auth()).unwrap();
        assert_eq!(service.issuer(), "staging.rafiq.com");
    }

    #[test]
    fn test_malformed_yaml() {
        let file = write_config("auth: [not, a, map]\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_unknown_type_for_ttl() {
        let file = write_config("auth:\n  session_ttl_secs: forever\n");
        assert!(Config::from_file(file.path()).is_err());
    }

    /// Test that the minimum secret length is enforced on decoded bytes
    #[test]
    fn test_secret_length_counts_bytes() {
        let mut config = ConfigFactory::valid();
        config.secret = Some(SharedSecret::new(vec![b'x'; MIN_SECRET_LEN - 1]).to_base64());
        assert!(config.validate().is_err());

        config.secret = Some(SharedSecret::new(vec![b'x'; MIN_SECRET_LEN]).to_base64());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected_by_config_validate() {
        let config = Config {
            auth: rafiq_auth::AuthConfig {
                passcode_step_secs: validation::MAX_PASSCODE_STEP_SECS + 1,
                ..ConfigFactory::valid()
            },
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Auth config error"));
    }

    #[test]
    fn test_service_rejects_missing_secret() {
        let config = rafiq_auth::AuthConfig::default();
        assert!(AuthService::new(&config).is_err());
    }
}
