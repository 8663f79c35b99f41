//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use pricer_core::analytical::DomainPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: text, json")]
    InvalidLogFormat(String),

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Invalid domain policy: {0}. Must be one of: strict, legacy")]
    InvalidDomainPolicy(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Metrics port {0} conflicts with the HTTP port")]
    MetricsPortConflict(u16),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Parse a domain policy name (case-insensitive)
pub fn parse_domain_policy(s: &str) -> Result<DomainPolicy, ConfigError> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(DomainPolicy::Strict),
        "legacy" => Ok(DomainPolicy::Legacy),
        _ => Err(ConfigError::InvalidDomainPolicy(s.to_string())),
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Log output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_format: LogFormat,
    /// Environment (development, staging, production)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub environment: Environment,
    /// Grace period for in-flight requests on shutdown, in seconds
    pub shutdown_timeout_secs: u64,
    /// How out-of-domain pricing inputs are handled
    #[serde(deserialize_with = "deserialize_domain_policy")]
    pub domain_policy: DomainPolicy,
    /// Port for the Prometheus exporter; disabled when unset
    pub metrics_port: Option<u16>,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_domain_policy<'de, D>(deserializer: D) -> Result<DomainPolicy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_domain_policy(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: LogLevel::Info,
            log_format: LogFormat::Text,
            environment: Environment::Development,
            shutdown_timeout_secs: 30,
            domain_policy: DomainPolicy::Strict,
            metrics_port: None,
        }
    }
}

/// Environment variable names read by [`ServerConfig::apply_env_with`]
pub mod env_vars {
    pub const HOST: &str = "PRICER_SERVER_HOST";
    pub const PORT: &str = "PRICER_SERVER_PORT";
    pub const LOG_LEVEL: &str = "PRICER_LOG_LEVEL";
    pub const LOG_FORMAT: &str = "PRICER_LOG_FORMAT";
    pub const ENVIRONMENT: &str = "PRICER_ENV";
    pub const SHUTDOWN_TIMEOUT_SECS: &str = "PRICER_SHUTDOWN_TIMEOUT_SECS";
    pub const DOMAIN_POLICY: &str = "PRICER_DOMAIN_POLICY";
    pub const METRICS_PORT: &str = "PRICER_METRICS_PORT";
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(value.to_string()))
}

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from variables resolved by `lookup`
    ///
    /// Only variables that are present are applied; `lookup` is normally
    /// `std::env::var`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env_vars::HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            self.port = parse_port(&port)?;
        }
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(format) = lookup(env_vars::LOG_FORMAT) {
            self.log_format = format.parse()?;
        }
        if let Some(env) = lookup(env_vars::ENVIRONMENT) {
            self.environment = env.parse()?;
        }
        if let Some(timeout) = lookup(env_vars::SHUTDOWN_TIMEOUT_SECS) {
            self.shutdown_timeout_secs =
                timeout
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: env_vars::SHUTDOWN_TIMEOUT_SECS,
                        value: timeout.clone(),
                    })?;
        }
        if let Some(policy) = lookup(env_vars::DOMAIN_POLICY) {
            self.domain_policy = parse_domain_policy(&policy)?;
        }
        if let Some(port) = lookup(env_vars::METRICS_PORT) {
            self.metrics_port = Some(parse_port(&port)?);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        match self.metrics_port {
            Some(0) => Err(ConfigError::InvalidPort("0".to_string())),
            Some(port) if port == self.port => Err(ConfigError::MetricsPortConflict(port)),
            _ => Ok(()),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.parse()?;
        }
        if let Some(log_format) = &cli.log_format {
            self.log_format = log_format.parse()?;
        }
        if let Some(policy) = &cli.domain_policy {
            self.domain_policy = parse_domain_policy(policy)?;
        }
        if let Some(port) = cli.metrics_port {
            self.metrics_port = Some(port);
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Log format override
    pub log_format: Option<String>,
    /// Domain policy override
    pub domain_policy: Option<String>,
    /// Metrics exporter port override
    pub metrics_port: Option<u16>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        ServerConfig::from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
