//! Shared, externally mutable access to the active configuration.

use std::sync::{PoisonError, RwLock};

use super::Config;

/// Runtime environment holding the active [`Config`].
///
/// Readers always see a consistent snapshot. The configuration may be
/// replaced or extended while renderers hold the environment.
#[derive(Debug, Default)]
pub struct Environment {
    config: RwLock<Config>,
}

impl Environment {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Resolve a dotted key against the active config.
    pub fn config_value(&self, key: &str, default: &str) -> String {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_str(key, default)
    }

    /// Clone of the active config.
    pub fn config(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace_config(&self, config: Config) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Layer `overrides` on top of the active config.
    pub fn merge_config(&self, overrides: Config) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(overrides);
    }
}
