use super::{ConfigTable, ConfigValue};
use crate::error::CollectError;
use core::time::Duration;
use std::path::PathBuf;

/// Configuration key naming the setfile.
pub const SETFILE_KEY: &str = "setfile";

/// Configuration key holding the soft execution timeout in seconds.
pub const EXECUTION_TIMEOUT_KEY: &str = "execution_timeout";

/// Timeout applied when the request does not carry one.
pub const DEFAULT_EXECUTION_TIMEOUT_SECS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    String,
    Integer,
}

impl ConfigKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// One configuration variable the collector understands.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRule {
    pub key: &'static str,
    pub kind: ConfigKind,
    pub required: bool,
    pub default: Option<ConfigValue>,
    pub description: &'static str,
}

/// Settings a collection call needs, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub setfile: PathBuf,
    pub execution_timeout: Duration,
}

/// The configuration variables accepted by the collector and their types.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPolicy {
    rules: Vec<ConfigRule>,
}

impl ConfigPolicy {
    #[must_use]
    pub fn rules(&self) -> &[ConfigRule] {
        &self.rules
    }

    /// Check `table` against the rules and extract typed [`Settings`].
    pub fn resolve(&self, table: &ConfigTable) -> Result<Settings, CollectError> {
        let setfile = PathBuf::from(self.string(table, SETFILE_KEY)?);
        let seconds = self.integer(table, EXECUTION_TIMEOUT_KEY)?;

        let seconds = u64::try_from(seconds)
            .map_err(|e| missing(EXECUTION_TIMEOUT_KEY, format!("timeout must not be negative, got {seconds} ({e})")))?;

        Ok(Settings {
            setfile,
            execution_timeout: Duration::from_secs(seconds),
        })
    }

    fn string(&self, table: &ConfigTable, key: &str) -> Result<String, CollectError> {
        match self.value(table, key)? {
            ConfigValue::String(s) => Ok(s),
            other => Err(type_mismatch(key, &other, ConfigKind::String)),
        }
    }

    fn integer(&self, table: &ConfigTable, key: &str) -> Result<i64, CollectError> {
        match self.value(table, key)? {
            ConfigValue::Integer(i) => Ok(i),
            other => Err(type_mismatch(key, &other, ConfigKind::Integer)),
        }
    }

    /// Look up a key, falling back to the rule's default.
    fn value(&self, table: &ConfigTable, key: &str) -> Result<ConfigValue, CollectError> {
        let rule = self
            .rules
            .iter()
            .find(|r| r.key == key)
            .ok_or_else(|| missing(key, "no rule defined for this variable".to_string()))?;

        match (table.get(key), &rule.default) {
            (Some(value), _) => Ok(value.clone()),
            (None, Some(default)) => Ok(default.clone()),
            (None, None) => Err(missing(key, format!("required {} value is not set", rule.kind.name()))),
        }
    }
}

fn missing(key: &str, reason: String) -> CollectError {
    CollectError::MissingConfiguration {
        key: key.to_string(),
        reason,
    }
}

fn type_mismatch(key: &str, value: &ConfigValue, expected: ConfigKind) -> CollectError {
    missing(
        key,
        format!("cannot parse {} value {value} as {}", value.type_name(), expected.name()),
    )
}

impl Default for ConfigPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                ConfigRule {
                    key: SETFILE_KEY,
                    kind: ConfigKind::String,
                    required: true,
                    default: None,
                    description: "Configuration file",
                },
                ConfigRule {
                    key: EXECUTION_TIMEOUT_KEY,
                    kind: ConfigKind::Integer,
                    required: false,
                    default: Some(ConfigValue::Integer(DEFAULT_EXECUTION_TIMEOUT_SECS)),
                    description: "Execution timeout",
                },
            ],
        }
    }
}
