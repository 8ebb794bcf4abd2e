use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::reload::enums::reload_signal::ReloadSignal;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            api_key: String::from("MyApiKey"),
            server: ServerConfig {
                bind_address: String::from("0.0.0.0:8443"),
                keep_alive: Some(60),
                request_timeout: Some(15),
                disconnect_timeout: Some(15),
                max_connections: Some(25000),
                workers: Some(available_parallelism().map(|n| n.get() as u64).unwrap_or(1)),
                tls_connection_rate: Some(256),
                fallback_to_default: true,
            },
            reload: ReloadConfig {
                enabled: true,
                signal: ReloadSignal::hangup,
            },
            certificates: vec![CertificateConfig {
                name: String::from("default"),
                cert_path: String::from("cert.pem"),
                key_path: String::from("key.pem"),
            }],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => file.write_all(data.as_ref()).map_err(ConfigurationError::IOError),
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. With `create`, a missing or corrupt file
    /// is replaced by the defaults, and an error is still returned so the
    /// operator edits it before starting.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[server] bind_address '{}' is not a socket address",
                self.server.bind_address
            )));
        }
        if self.certificates.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from(
                "at least one [[certificates]] entry is required",
            )));
        }
        let mut names = HashSet::new();
        for certificate in &self.certificates {
            Self::validate_value("[[certificates]] name", &certificate.name)?;
            Self::validate_value("[[certificates]] cert_path", &certificate.cert_path)?;
            Self::validate_value("[[certificates]] key_path", &certificate.key_path)?;
            if !names.insert(certificate.name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!(
                    "duplicate certificate name '{}'",
                    certificate.name
                )));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str) -> Result<(), ConfigurationError> {
        if value.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(format!("{} must not be empty", name)));
        }
        Ok(())
    }

    pub fn certificate(&self, name: &str) -> Option<&CertificateConfig> {
        self.certificates.iter().find(|certificate| certificate.name == name)
    }
}
