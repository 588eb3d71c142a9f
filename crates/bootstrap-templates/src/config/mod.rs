//! Dotted-key configuration store and the environment that exposes it.
//!
//! Configuration is a TOML table queried with dotted keys such as
//! `form.buttons.submit`. Lookups never fail: a missing key yields the
//! caller-supplied default.

mod environment;
pub(crate) mod loader;

pub use environment::Environment;
pub use loader::load_config;

use std::path::{Path, PathBuf};

use toml::{Table, Value};

/// Configuration values addressed by dotted keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: Table,
}

impl Config {
    /// Wrap an already parsed TOML table.
    pub fn new(values: Table) -> Self {
        Self { values }
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let values: Table = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: None,
            source: e,
        })?;
        Ok(Self { values })
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let values: Table = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source: e,
        })?;
        Ok(Self { values })
    }

    /// Look up a value by dotted key, walking nested tables.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }

    /// Look up a scalar value as a string, falling back to `default`.
    ///
    /// Integers, floats and booleans are stringified. Tables, arrays and
    /// datetimes are not considered scalar and yield `default`.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Integer(i)) => i.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            Some(Value::Boolean(b)) => b.to_string(),
            Some(other) => {
                tracing::warn!(
                    key,
                    kind = other.type_str(),
                    "Config value is not a scalar, using default"
                );
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    /// Set a value by dotted key, creating intermediate tables.
    ///
    /// Intermediate segments holding a non-table value are replaced.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut table = &mut self.values;
        for segment in segments {
            let entry = table
                .entry(segment.to_string())
                .or_insert_with(|| Value::Table(Table::new()));
            if !entry.is_table() {
                *entry = Value::Table(Table::new());
            }
            let Value::Table(next) = entry else {
                return;
            };
            table = next;
        }
        table.insert(last.to_string(), value.into());
    }

    /// Deep-merge `other` into this configuration. Values from `other` win.
    pub fn merge(&mut self, other: Config) {
        merge_tables(&mut self.values, other.values);
    }

    /// The underlying table.
    pub fn as_table(&self) -> &Table {
        &self.values
    }
}

fn merge_tables(target: &mut Table, source: Table) {
    for (key, value) in source {
        match (target.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "inline config".to_string())
}
