use crate::constants::{DEFAULT_API_ROOT, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars};
use crate::data_fetcher::api::FetcherOptions;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the Master League API, including the scheme.
    #[serde(default = "default_api_root")]
    pub api_root: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Whether TLS certificates are validated.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    /// Tournament stage page used for team win/loss records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standings_url: Option<String>,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_verify_tls() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_root: default_api_root(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            verify_tls: default_verify_tls(),
            standings_url: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling back
    /// to defaults when no file exists. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `MASTERLEAGUE_API_ROOT` - Override API root
    /// - `MASTERLEAGUE_LOG_FILE` - Override log file path
    /// - `MASTERLEAGUE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `MASTERLEAGUE_VERIFY_TLS` - `false` disables certificate validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    /// Unparseable numeric or boolean values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_root) = lookup(env_vars::API_ROOT) {
            self.api_root = api_root;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(verify) = lookup(env_vars::VERIFY_TLS).and_then(|s| s.parse::<bool>().ok()) {
            self.verify_tls = verify;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_root, self.http_timeout_seconds, &self.log_file_path)
    }

    /// Transport options for the HTTP fetcher.
    pub fn fetcher_options(&self) -> FetcherOptions {
        FetcherOptions {
            timeout: Duration::from_secs(self.http_timeout_seconds),
            verify_tls: self.verify_tls,
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Root:");
        println!("{}", config.api_root);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Verify TLS:");
        println!("{}", config.verify_tls);
        println!("────────────────────────────────────");
        println!("Standings Page:");
        println!("{}", config.standings_url.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_root = "https://api.example.com"
log_file_path = "/custom/log/path"
verify_tls = false
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_root, "https://api.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert!(!config.verify_tls);
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_root, "https://api.masterleague.net");
        assert!(config.verify_tls);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("masterleague_stats").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            api_root: "https://api.example.com".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 10,
            verify_tls: false,
            standings_url: Some("https://masterleague.net/tournament/42/stage/1/".to_string()),
        };

        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_root = [").await.unwrap();

        let error = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MASTERLEAGUE_API_ROOT", "http://localhost:8080"),
            ("MASTERLEAGUE_HTTP_TIMEOUT", "5"),
            ("MASTERLEAGUE_VERIFY_TLS", "false"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_root, "http://localhost:8080");
        assert_eq!(config.http_timeout_seconds, 5);
        assert!(!config.verify_tls);
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    fn test_unparseable_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            "MASTERLEAGUE_HTTP_TIMEOUT" => Some("soon".to_string()),
            "MASTERLEAGUE_VERIFY_TLS" => Some("nope".to_string()),
            _ => None,
        });

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_fetcher_options_from_config() {
        let config = Config {
            http_timeout_seconds: 12,
            verify_tls: false,
            ..Config::default()
        };

        let options = config.fetcher_options();
        assert_eq!(options.timeout, Duration::from_secs(12));
        assert!(!options.verify_tls);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();

        assert!(config_path.contains("masterleague_stats"));
        assert!(config_path.ends_with("config.toml"));
    }
}
