//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ClockStyle;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatboxConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WidgetConfig {
    pub clock: Option<ClockStyle>,
    pub start_open: Option<bool>,
    pub title: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub clock: Option<ClockStyle>,
    pub open: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENDPOINT: &str = "/send_message";
pub const DEFAULT_TITLE: &str = "Chat";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub endpoint: String,
    /// `None` waits for a reply indefinitely.
    pub timeout: Option<Duration>,
    pub clock: ClockStyle,
    pub start_open: bool,
    pub title: String,
}

impl ResolvedConfig {
    /// Full URL of the message endpoint: base URL joined with the endpoint path.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&ChatboxConfig::default(), &CliOverrides::default(), |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chatbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatbox").join("config.toml"))
}

/// Load config from `~/.chatbox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatboxConfig::default()`.
pub fn load_config() -> Result<ChatboxConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ChatboxConfig::default())
        }
    }
}

/// Load config from an explicit path. Malformed TOML is `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<ChatboxConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ChatboxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChatboxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Chatbox Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://127.0.0.1:5000"   # Or set CHATBOX_BASE_URL
# endpoint = "/send_message"           # Or set CHATBOX_ENDPOINT
# timeout_secs = 30                    # Unset = wait forever. Or CHATBOX_TIMEOUT_SECS

# [widget]
# clock = "24h"                        # "24h" or "12h"
# start_open = false
# title = "Chat"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ChatboxConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ChatboxConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("CHATBOX_BASE_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("CHATBOX_ENDPOINT"))
        .or_else(|| config.server.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let env_timeout = env("CHATBOX_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!("Ignoring CHATBOX_TIMEOUT_SECS={:?}: not a number", raw);
            None
        }
    });
    // Zero disables the timeout, same as leaving it unset.
    let timeout = cli
        .timeout_secs
        .or(env_timeout)
        .or(config.server.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    ResolvedConfig {
        base_url,
        endpoint,
        timeout,
        clock: cli.clock.or(config.widget.clock).unwrap_or_default(),
        start_open: cli.open || config.widget.start_open.unwrap_or(false),
        title: config
            .widget
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ChatboxConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout, None);
        assert_eq!(resolved.clock, ClockStyle::H24);
        assert!(!resolved.start_open);
        assert_eq!(resolved.endpoint_url(), "http://127.0.0.1:5000/send_message");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ChatboxConfig {
            server: ServerConfig {
                base_url: Some("http://chat.local:8080/".to_string()),
                endpoint: Some("api/send".to_string()),
                timeout_secs: Some(10),
            },
            widget: WidgetConfig {
                clock: Some(ClockStyle::H12),
                start_open: Some(true),
                title: Some("Support".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint_url(), "http://chat.local:8080/api/send");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));
        assert_eq!(resolved.clock, ClockStyle::H12);
        assert!(resolved.start_open);
        assert_eq!(resolved.title, "Support");
    }

    #[test]
    fn test_env_overrides_file_and_cli_overrides_env() {
        let config = ChatboxConfig {
            server: ServerConfig {
                base_url: Some("http://from-file".to_string()),
                timeout_secs: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("CHATBOX_BASE_URL", "http://from-env"),
            ("CHATBOX_TIMEOUT_SECS", "7"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(7)));

        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_bad_env_timeout_falls_back_to_file() {
        let config = ChatboxConfig {
            server: ServerConfig {
                timeout_secs: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let lookup = |key: &str| (key == "CHATBOX_TIMEOUT_SECS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let cli = CliOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&ChatboxConfig::default(), &cli, no_env);
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_cli_open_flag_wins() {
        let cli = CliOverrides {
            open: true,
            ..Default::default()
        };
        let resolved = resolve_with_env(&ChatboxConfig::default(), &cli, no_env);
        assert!(resolved.start_open);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[server]
base_url = "http://localhost:5000"
endpoint = "/send_message"
timeout_secs = 30

[widget]
clock = "12h"
start_open = true
"#;
        let config: ChatboxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.server.timeout_secs, Some(30));
        assert_eq!(config.widget.clock, Some(ClockStyle::H12));
        assert_eq!(config.widget.start_open, Some(true));
        assert!(config.widget.title.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[widget]
clock = "24h"
"#;
        let config: ChatboxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.widget.clock, Some(ClockStyle::H24));
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("chatbox-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[server\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("chatbox-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.server.base_url.is_none());

        // The generated file is all comments, so it parses to defaults too.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.server.endpoint.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
