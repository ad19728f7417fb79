//! Data model shared by the host and the actors.

pub mod config;

pub use config::{Config, ConfigError, ConfigValue};
