//! # Configuration Message
//!
//! [`Config`] is an immutable key/value document. It is what the host delivers to an
//! actor to configure it, and what [`Config::from_toml_str`] produces from a TOML file.
//!
//! Lookups take dotted paths: `config.get_bool("static.value")` walks into the `static`
//! table and reads `value`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors returned by [`Config`] lookups and parsing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// No value exists at the path.
    #[error("No configuration setting found for key '{0}'")]
    Missing(String),

    /// A value exists but has a different type.
    #[error("Configuration key '{path}' has type {found} rather than {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The document could not be parsed.
    #[error("Invalid configuration document: {0}")]
    Parse(String),
}

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Table(Config),
}

impl ConfigValue {
    /// Human readable type name used in [`ConfigError::WrongType`].
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "BOOLEAN",
            ConfigValue::Integer(_) => "NUMBER",
            ConfigValue::Float(_) => "NUMBER",
            ConfigValue::String(_) => "STRING",
            ConfigValue::List(_) => "LIST",
            ConfigValue::Table(_) => "OBJECT",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Integer(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Float(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::String(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::String(v)
    }
}

impl From<Config> for ConfigValue {
    fn from(v: Config) -> Self {
        ConfigValue::Table(v)
    }
}

/// An immutable key/value configuration object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: BTreeMap<String, ConfigValue>,
}

impl Config {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a top-level key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up the raw value at a dotted path.
    pub fn get(&self, path: &str) -> Result<&ConfigValue, ConfigError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self
            .entries
            .get(first)
            .ok_or_else(|| ConfigError::Missing(path.to_string()))?;

        for segment in segments {
            current = match current {
                ConfigValue::Table(table) => table
                    .entries
                    .get(segment)
                    .ok_or_else(|| ConfigError::Missing(path.to_string()))?,
                other => {
                    return Err(ConfigError::WrongType {
                        path: path.to_string(),
                        expected: "OBJECT",
                        found: other.type_name(),
                    })
                }
            };
        }
        Ok(current)
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, ConfigError> {
        match self.get(path)? {
            ConfigValue::Bool(v) => Ok(*v),
            other => Err(wrong_type(path, "BOOLEAN", other)),
        }
    }

    pub fn get_i64(&self, path: &str) -> Result<i64, ConfigError> {
        match self.get(path)? {
            ConfigValue::Integer(v) => Ok(*v),
            other => Err(wrong_type(path, "NUMBER", other)),
        }
    }

    pub fn get_str(&self, path: &str) -> Result<&str, ConfigError> {
        match self.get(path)? {
            ConfigValue::String(v) => Ok(v),
            other => Err(wrong_type(path, "STRING", other)),
        }
    }

    pub fn get_table(&self, path: &str) -> Result<&Config, ConfigError> {
        match self.get(path)? {
            ConfigValue::Table(v) => Ok(v),
            other => Err(wrong_type(path, "OBJECT", other)),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config(")?;
        for (i, key) in self.entries.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, ")")
    }
}

fn wrong_type(path: &str, expected: &'static str, found: &ConfigValue) -> ConfigError {
    ConfigError::WrongType {
        path: path.to_string(),
        expected,
        found: found.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bool() {
        let config = Config::new().with("value", true);
        assert_eq!(config.get_bool("value"), Ok(true));
    }

    #[test]
    fn test_missing_and_wrong_type() {
        let config = Config::new().with("value", "yes");
        assert_eq!(
            config.get_bool("other"),
            Err(ConfigError::Missing("other".into()))
        );
        assert_eq!(
            config.get_bool("value"),
            Err(ConfigError::WrongType {
                path: "value".into(),
                expected: "BOOLEAN",
                found: "STRING",
            })
        );
    }

    #[test]
    fn test_dotted_paths() {
        let config = Config::new()
            .with("static", Config::new().with("value", false))
            .with("name", "demo");

        assert_eq!(config.get_bool("static.value"), Ok(false));
        assert!(config.has_path("static"));
        assert!(!config.has_path("static.missing"));
        assert!(matches!(
            config.get_bool("name.value"),
            Err(ConfigError::WrongType { expected: "OBJECT", .. })
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let text = r#"
            value = true
            retries = 3
            label = "fixture"

            [nested]
            value = false
        "#;
        let config = Config::from_toml_str(text).unwrap();

        assert_eq!(config.get_bool("value"), Ok(true));
        assert_eq!(config.get_i64("retries"), Ok(3));
        assert_eq!(config.get_str("label"), Ok("fixture"));
        assert_eq!(config.get_bool("nested.value"), Ok(false));
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["label", "nested", "retries", "value"]);
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(matches!(
            Config::from_toml_str("value = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
