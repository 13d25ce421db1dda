use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::services::llm::DEFAULT_MODEL;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Completion service settings
///
/// `api_key` and `api_base` have no usable default and must be supplied,
/// normally through `OPENAI_API_KEY` and `API_BASE`.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing required setting {setting} (set the {env} environment variable)")]
    Missing { setting: &'static str, env: &'static str },

    #[error("Invalid setting {setting}: {reason}")]
    Invalid { setting: &'static str, reason: String },
}

/// What `Config::load` did, kept until logging is initialized
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Config file that was read, `None` when running on defaults
    pub source: Option<String>,
    /// Settings taken from the environment, as "setting: value"
    pub overrides: Vec<String>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded configuration from {}", path),
            None => tracing::warn!("Configuration file not found, using defaults"),
        }
        for line in &self.overrides {
            tracing::info!("Override {} from env", line);
        }
        for line in &self.warnings {
            tracing::warn!("{}", line);
        }
    }
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file (explicit path, or the first one found)
    /// 2. Override with environment variables
    /// 3. Validate the final configuration
    ///
    /// Nothing is logged here; call [`LoadReport::log`] once a subscriber is installed.
    pub fn load(explicit_path: Option<&str>) -> Result<(Self, LoadReport), ConfigError> {
        let mut report = LoadReport {
            source: explicit_path.map(str::to_string).or_else(Self::find_config_file),
            ..Default::default()
        };
        let mut config = match &report.source {
            Some(path) => Self::from_toml(path)?,
            None => Config::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok(), &mut report);
        config.validate()?;

        Ok((config, report))
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - OPENAI_API_KEY: Completion service credential (required)
    /// - API_BASE: Completion service base URL, e.g. https://api.openai.com/v1 (required)
    /// - APP_LLM_MODEL: Model identifier (default: gpt-4o-mini-2024-07-18)
    /// - APP_LLM_TIMEOUT_SECS: Request timeout (accepts "60", "60s", "1m")
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 7860)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,tcga_insight=debug")
    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
        report: &mut LoadReport,
    ) {
        if let Some(key) = var("OPENAI_API_KEY") {
            self.llm.api_key = key;
            report.overrides.push(format!("llm.api_key: {}", mask_secret(&self.llm.api_key)));
        }

        if let Some(base) = var("API_BASE") {
            self.llm.api_base = base;
            report.overrides.push(format!("llm.api_base: {}", self.llm.api_base));
        }

        if let Some(model) = var("APP_LLM_MODEL") {
            self.llm.model = model;
            report.overrides.push(format!("llm.model: {}", self.llm.model));
        }

        if let Some(timeout) = var("APP_LLM_TIMEOUT_SECS") {
            match parse_duration_to_secs(&timeout) {
                Ok(val) => {
                    self.llm.timeout_secs = val;
                    report.overrides.push(format!("llm.timeout_secs: {}", val));
                },
                Err(e) => report.warnings.push(format!(
                    "Invalid APP_LLM_TIMEOUT_SECS '{}': {} (keep {})",
                    timeout, e, self.llm.timeout_secs
                )),
            }
        }

        if let Some(host) = var("APP_SERVER_HOST") {
            self.server.host = host;
            report.overrides.push(format!("server.host: {}", self.server.host));
        }

        if let Some(port) = var("APP_SERVER_PORT") {
            match port.parse() {
                Ok(val) => {
                    self.server.port = val;
                    report.overrides.push(format!("server.port: {}", val));
                },
                Err(_) => report.warnings.push(format!(
                    "Invalid APP_SERVER_PORT '{}' (keep {})",
                    port, self.server.port
                )),
            }
        }

        if let Some(level) = var("APP_LOG_LEVEL") {
            self.logging.level = level;
            report.overrides.push(format!("logging.level: {}", self.logging.level));
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::Missing { setting: "llm.api_key", env: "OPENAI_API_KEY" });
        }

        if self.llm.api_base.trim().is_empty() {
            return Err(ConfigError::Missing { setting: "llm.api_base", env: "API_BASE" });
        }

        if !self.llm.api_base.starts_with("http://") && !self.llm.api_base.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                setting: "llm.api_base",
                reason: format!("'{}' is not an http(s) URL", self.llm.api_base),
            });
        }

        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                setting: "llm.timeout_secs",
                reason: "must be > 0".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                setting: "server.port",
                reason: "cannot be 0".to_string(),
            });
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths = ["conf/config.toml", "config.toml"];

        possible_paths
            .iter()
            .find(|path| Path::new(path).exists())
            .map(|path| path.to_string())
    }

    fn from_toml(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 7860 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,tcga_insight=debug".to_string(),
            file: Some("logs/tcga-insight.log".to_string()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
            max_retries: 3,
        }
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.chars().count() > 8 {
        let head: String = secret.chars().take(3).collect();
        let tail: String = secret.chars().skip(secret.chars().count() - 4).collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Plain numbers are seconds
    if let Ok(val) = input.trim().parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(n),
        "m" | "min" | "mins" | "minute" | "minutes" => {
            n.checked_mul(60).ok_or_else(|| "duration too large".to_string())
        },
        _ => Err(format!("unsupported unit: {}", unit)),
    }
}

// Accepts either a number of seconds or a string like "60s" / "1m"
fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '60s', '1m'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.llm.model, "gpt-4o-mini-2024-07-18");
        assert_eq!(config.llm.timeout_secs, 60);
        assert_eq!(config.llm.max_retries, 3);
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { env: "OPENAI_API_KEY", .. })
        ));

        let mut config = Config::default();
        config.apply_env_overrides(env(&[("OPENAI_API_KEY", "sk-abc")]), &mut LoadReport::default());
        assert!(matches!(config.validate(), Err(ConfigError::Missing { env: "API_BASE", .. })));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let mut report = LoadReport::default();
        config.apply_env_overrides(
            env(&[
                ("OPENAI_API_KEY", "sk-abcdef123456"),
                ("API_BASE", "https://api.example.com/v1"),
                ("APP_LLM_MODEL", "gpt-4-turbo"),
                ("APP_LLM_TIMEOUT_SECS", "2m"),
                ("APP_SERVER_PORT", "9000"),
                ("APP_LOG_LEVEL", "debug"),
            ]),
            &mut report,
        );

        assert!(config.validate().is_ok());
        assert_eq!(config.llm.api_base, "https://api.example.com/v1");
        assert_eq!(config.llm.model, "gpt-4-turbo");
        assert_eq!(config.llm.timeout_secs, 120);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");

        assert_eq!(report.overrides.len(), 6);
        assert!(report.overrides.contains(&"llm.timeout_secs: 120".to_string()));
        assert!(report.overrides.iter().all(|line| !line.contains("abcdef123456")));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        let mut report = LoadReport::default();
        config.apply_env_overrides(
            env(&[
                ("OPENAI_API_KEY", "sk-abc"),
                ("API_BASE", "api.example.com"),
                ("APP_LLM_TIMEOUT_SECS", "soon"),
                ("APP_SERVER_PORT", "http"),
            ]),
            &mut report,
        );
        assert_eq!(config.llm.timeout_secs, 60);
        assert_eq!(config.server.port, 7860);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("APP_LLM_TIMEOUT_SECS"));
        assert!(report.warnings[1].contains("APP_SERVER_PORT"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { setting: "llm.api_base", .. })
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [llm]
            api_key = "sk-from-file"
            api_base = "https://api.openai.com/v1"
            timeout_secs = "30s"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.llm.max_retries, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_api_key() {
        let mut config = LlmConfig::default();
        config.api_key = "sk-1234567890abcdef".to_string();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("1234567890"));
        assert!(debug.contains("sk-...cdef"));
    }

    #[test]
    fn test_parse_duration_to_secs() {
        assert_eq!(parse_duration_to_secs("45"), Ok(45));
        assert_eq!(parse_duration_to_secs("45s"), Ok(45));
        assert_eq!(parse_duration_to_secs("1m"), Ok(60));
        assert!(parse_duration_to_secs("1h").is_err());
        assert!(parse_duration_to_secs("s").is_err());
        assert_eq!(parse_duration_to_secs("400000000000000000m"), Err("duration too large".to_string()));
    }
}
