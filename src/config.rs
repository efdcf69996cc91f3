//! Configuration module for gosig.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.gosig/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the binary)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `GOSIG_` and use double underscores
//! to separate nested levels:
//! - `GOSIG_WALK__RECURSIVE=true` sets `walk.recursive`
//! - `GOSIG_WALK__INCLUDE_TESTS=false` sets `walk.include_tests`
//! - `GOSIG_LOG_LEVEL=debug` sets `log_level`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file
pub const CONFIG_DIR: &str = ".gosig";

/// Settings file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "settings.toml";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "GOSIG_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode (forces `debug` log level)
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Source discovery settings
    #[serde(default)]
    pub walk: WalkConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WalkConfig {
    /// Descend into subdirectories (each directory is its own package set)
    #[serde(default = "default_false")]
    pub recursive: bool,

    /// List `_test.go` files too
    #[serde(default = "default_true")]
    pub include_tests: bool,

    /// Number of parallel parser threads
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            log_level: default_log_level(),
            walk: WalkConfig::default(),
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            include_tests: true,
            parallel_threads: default_parallel_threads(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref().to_path_buf())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Find the settings file by looking for a `.gosig` directory
    /// from the current directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where `.gosig` is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Effective tracing filter
    pub fn effective_log_level(&self) -> &str {
        if self.debug { "debug" } else { self.log_level.as_str() }
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.walk.recursive);
        assert!(settings.walk.include_tests);
        assert!(settings.walk.parallel_threads >= 1);
        assert_eq!(settings.effective_log_level(), "warn");
    }

    #[test]
    fn test_settings_file_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.create_dir(CONFIG_DIR)?;
            jail.create_file(
                ".gosig/settings.toml",
                r#"
log_level = "info"

[walk]
recursive = true
parallel_threads = 2
"#,
            )?;
            jail.set_env("GOSIG_WALK__INCLUDE_TESTS", "false");
            jail.set_env("GOSIG_WALK__PARALLEL_THREADS", "3");

            let settings = Settings::load().map_err(|e| *e)?;
            assert_eq!(settings.log_level, "info");
            assert!(settings.walk.recursive);
            assert!(!settings.walk.include_tests);
            assert_eq!(settings.walk.parallel_threads, 3);
            Ok(())
        });
    }

    #[test]
    fn test_load_from_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "debug = true\n")?;

            let settings = Settings::load_from("custom.toml").map_err(|e| *e)?;
            assert!(settings.debug);
            assert_eq!(settings.effective_log_level(), "debug");
            assert!(settings.walk.include_tests);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[walk]\nrecursive = [1, 2]\n")?;

            assert!(Settings::load_from("bad.toml").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_settings_render_as_toml() {
        let text = Settings::default().to_toml().unwrap();
        assert!(text.contains("[walk]"));
        assert!(text.contains("include_tests = true"));
    }
}
