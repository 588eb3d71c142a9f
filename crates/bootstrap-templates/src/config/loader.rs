//! Config file discovery and loading for `bootstrap-templates.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./bootstrap-templates.toml` (project-local)
//! 2. `~/.config/bootstrap-templates.toml` (user-global)

use std::path::{Path, PathBuf};

use super::Config;

const CONFIG_FILENAME: &str = "bootstrap-templates.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";

/// Load config from the first discovered location, or return defaults.
pub fn load_config() -> Config {
    let home = home_dir();
    match find_config_file(Path::new("."), home.as_deref()) {
        Some(path) => load_or_default(&path),
        None => Config::default(),
    }
}

fn load_or_default(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => {
            tracing::debug!(?path, "Loaded bootstrap config");
            config
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to load bootstrap config, using defaults");
            Config::default()
        }
    }
}

/// Search for the config file in precedence order.
fn find_config_file(project_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = project_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home {
        let global = home.join(GLOBAL_CONFIG_DIR).join(CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
