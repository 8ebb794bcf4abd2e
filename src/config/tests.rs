#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::certificate_config::CertificateConfig;
        use crate::config::structs::configuration::Configuration;
        use crate::reload::enums::reload_signal::ReloadSignal;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.log_level, "info");
            assert!(config.reload.enabled);
            assert_eq!(config.reload.signal, ReloadSignal::hangup);
            assert!(config.server.fallback_to_default);
        }

        #[test]
        fn test_init_survives_toml() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.certificates, config.certificates);
            assert_eq!(loaded.server.bind_address, config.server.bind_address);
        }

        #[test]
        fn test_load_minimal_file() {
            let data = r#"
                log_level = "debug"
                api_key = "secret"

                [server]
                bind_address = "127.0.0.1:8443"

                [reload]
                enabled = true
                signal = "user_defined1"

                [[certificates]]
                name = "a"
                cert_path = "a.pem"
                key_path = "a.key"

                [[certificates]]
                name = "b"
                cert_path = "b.pem"
                key_path = "b.key"
            "#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.reload.signal, ReloadSignal::user_defined1);
            assert!(config.server.fallback_to_default);
            assert_eq!(config.server.workers, None);
            assert_eq!(config.certificates.len(), 2);
            assert_eq!(config.certificate("b").unwrap().cert_path, "b.pem");
            assert!(config.certificate("c").is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_invalid_toml() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/config.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.server.bind_address = String::from("localhost");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_missing_certificates() {
            let mut config = Configuration::init();
            config.certificates.clear();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_duplicate_names() {
            let mut config = Configuration::init();
            config.certificates.push(CertificateConfig {
                name: String::from("default"),
                cert_path: String::from("other.pem"),
                key_path: String::from("other.key"),
            });
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("duplicate certificate name 'default'"));
        }

        #[test]
        fn test_validate_rejects_empty_path() {
            let mut config = Configuration::init();
            config.certificates[0].key_path = String::from("  ");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_load_from_file_creates_defaults() {
            let dir = tempfile::TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_string_lossy().to_string();
            assert!(Configuration::load_from_file(&path, false).is_err());
            assert!(!std::path::Path::new(&path).exists());
            assert!(Configuration::load_from_file(&path, true).is_err());
            assert!(std::path::Path::new(&path).exists());
            let config = Configuration::load_from_file(&path, false).unwrap();
            assert_eq!(config.api_key, "MyApiKey");
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("bad"));
            assert_eq!(error.to_string(), "invalid configuration: bad");
        }

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
            assert_eq!(error.to_string(), "gone");
        }
    }
}
