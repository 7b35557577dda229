//! Configuration for the dispatch bridge.
//!
//! # Configuration Precedence
//!
//! Settings are resolved in this order (highest priority first):
//!
//! 1. **Programmatic**: builder methods such as [`BridgeConfig::label_prefix`]
//! 2. **Environment variables**: `PROGRESS_*`
//! 3. **Config file**: a TOML `[bridge]` table (requires `config-file` feature)
//! 4. **Defaults**: [`BridgeConfig::default()`]
//!
//! # Supported Environment Variables
//!
//! | Variable | Type | Maps to |
//! |----------|------|---------|
//! | `PROGRESS_LABEL_PREFIX` | `String` (empty clears) | `label_prefix` |
//! | `PROGRESS_TRANSITION_LEVEL` | `trace`..`error` | `transition_level` |
//! | `PROGRESS_EMIT_PENDING` | `bool` | `emit_pending` |

use crate::error::ConfigError;
use crate::observability::LogLevel;

/// Environment variable name for the action type prefix.
pub const ENV_LABEL_PREFIX: &str = "PROGRESS_LABEL_PREFIX";
/// Environment variable name for the transition log level.
pub const ENV_TRANSITION_LEVEL: &str = "PROGRESS_TRANSITION_LEVEL";
/// Environment variable name for the pending-action toggle.
pub const ENV_EMIT_PENDING: &str = "PROGRESS_EMIT_PENDING";

/// Settings for [`Thunk`](crate::dispatch::Thunk) and
/// [`run_with_dispatch`](crate::dispatch::run_with_dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Namespace for emitted action types. With a prefix `p`, a bridge
    /// labelled `l` emits actions of type `"p/l"`.
    pub label_prefix: Option<String>,
    /// Level at which each transition is logged.
    pub transition_level: LogLevel,
    /// Whether the synchronous `Pending` action is emitted.
    pub emit_pending: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            label_prefix: None,
            transition_level: LogLevel::Debug,
            emit_pending: true,
        }
    }
}

impl BridgeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Sets the action type prefix.
    #[must_use]
    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = Some(prefix.into());
        self
    }

    /// Sets the transition log level.
    #[must_use]
    pub const fn transition_level(mut self, level: LogLevel) -> Self {
        self.transition_level = level;
        self
    }

    /// Enables or disables the `Pending` action.
    #[must_use]
    pub const fn emit_pending(mut self, emit: bool) -> Self {
        self.emit_pending = emit;
        self
    }

    /// Returns the action type emitted for `label`.
    ///
    /// ```
    /// use progress_state::BridgeConfig;
    ///
    /// assert_eq!(BridgeConfig::default().action_type("load"), "load");
    /// assert_eq!(BridgeConfig::new().label_prefix("users").action_type("load"), "users/load");
    /// ```
    #[must_use]
    pub fn action_type(&self, label: &str) -> String {
        match &self.label_prefix {
            Some(prefix) => format!("{prefix}/{label}"),
            None => label.to_string(),
        }
    }
}

/// Apply environment variable overrides from the process environment.
///
/// Only variables that are set are applied. Returns an error if a variable
/// is set but cannot be parsed.
pub fn apply_env_overrides(config: &mut BridgeConfig) -> Result<(), ConfigError> {
    apply_env_overrides_with(config, |name| std::env::var(name).ok())
}

/// Apply environment overrides read through `lookup`.
///
/// `lookup` receives a variable name and returns its value if set.
pub fn apply_env_overrides_with<F>(config: &mut BridgeConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_LABEL_PREFIX) {
        let val = val.trim();
        config.label_prefix = (!val.is_empty()).then(|| val.to_string());
    }
    if let Some(val) = lookup(ENV_TRANSITION_LEVEL) {
        config.transition_level = parse_level(ENV_TRANSITION_LEVEL, &val)?;
    }
    if let Some(val) = lookup(ENV_EMIT_PENDING) {
        config.emit_pending = parse_bool(ENV_EMIT_PENDING, &val)?;
    }
    Ok(())
}

fn parse_level(var_name: &str, val: &str) -> Result<LogLevel, ConfigError> {
    val.parse::<LogLevel>()
        .map_err(|e| ConfigError::invalid(var_name, e.to_string()))
}

fn parse_bool(var_name: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(
            var_name,
            format!("expected bool (true/false/1/0/yes/no), got {val:?}"),
        )),
    }
}

// =========================================================================
// TOML config file support (feature-gated)
// =========================================================================

/// TOML-deserializable bridge configuration.
///
/// ```toml
/// [bridge]
/// label_prefix = "users"
/// transition_level = "info"
/// emit_pending = false
/// ```
#[cfg(feature = "config-file")]
#[derive(serde::Deserialize, Default, Debug)]
pub struct ProgressTomlConfig {
    /// Bridge settings.
    #[serde(default)]
    pub bridge: BridgeToml,
}

/// `[bridge]` section of the TOML config.
#[cfg(feature = "config-file")]
#[derive(serde::Deserialize, Default, Debug)]
pub struct BridgeToml {
    /// Action type prefix.
    pub label_prefix: Option<String>,
    /// Transition log level.
    pub transition_level: Option<LogLevel>,
    /// Emit the `Pending` action.
    pub emit_pending: Option<bool>,
}

/// Apply a parsed TOML config. Only fields present in the file override.
#[cfg(feature = "config-file")]
pub fn apply_toml_config(config: &mut BridgeConfig, toml: &ProgressTomlConfig) {
    if let Some(ref v) = toml.bridge.label_prefix {
        config.label_prefix = Some(v.clone());
    }
    if let Some(v) = toml.bridge.transition_level {
        config.transition_level = v;
    }
    if let Some(v) = toml.bridge.emit_pending {
        config.emit_pending = v;
    }
}

/// Parse a TOML string into a [`ProgressTomlConfig`].
#[cfg(feature = "config-file")]
pub fn parse_toml_str(toml_str: &str) -> Result<ProgressTomlConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse a TOML file into a [`ProgressTomlConfig`].
#[cfg(feature = "config-file")]
pub fn parse_toml_file(path: &std::path::Path) -> Result<ProgressTomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_toml_str(&content)
}

#[cfg(feature = "config-file")]
impl BridgeConfig {
    /// Defaults, then the file at `path`, then environment overrides.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_toml_config(&mut config, &parse_toml_file(path)?);
        apply_env_overrides(&mut config)?;
        Ok(config)
    }
}

// =========================================================================
// Tests
// =========================================================================
