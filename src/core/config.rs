//! Battle session configuration.
//!
//! Configuration only covers how a session is run (seeding, where character
//! data comes from, presentation pacing). The combat formulas are fixed and
//! live next to the code that applies them.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of fighters on each roster.
pub const ROSTER_SIZE: usize = 5;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json")]
    Parse(#[from] serde_json::Error),
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for the session RNG. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// JSON character catalog to draw from. `None` uses the bundled one.
    pub catalog_path: Option<PathBuf>,

    /// Pause between printed lines, in milliseconds.
    pub pause_ms: u64,

    /// Print stamina and affinity rolls in fighter summaries.
    pub show_rolls: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            catalog_path: None,
            pause_ms: 500,
            show_rolls: false,
        }
    }
}

impl BattleConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config reading characters from `path`.
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Create a new config with custom pacing.
    #[must_use]
    pub fn with_pause_ms(mut self, pause_ms: u64) -> Self {
        self.pause_ms = pause_ms;
        self
    }

    /// Create a new config that prints roll values.
    #[must_use]
    pub fn with_show_rolls(mut self, show: bool) -> Self {
        self.show_rolls = show;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HERO_CLASH_SEED` - Session seed (default: random)
    /// - `HERO_CLASH_CATALOG` - Path to a JSON character catalog (default: bundled)
    /// - `HERO_CLASH_PAUSE_MS` - Pause between printed lines (default: 500)
    /// - `HERO_CLASH_SHOW_ROLLS` - Print stamina/affinity rolls (default: false)
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Apply environment overrides on top of `self`.
    #[must_use]
    pub fn merge_env(self) -> Self {
        self.merge_from(|key| env::var(key).ok())
    }

    /// Apply overrides looked up by variable name.
    ///
    /// Values that do not parse are logged and leave the current setting.
    #[must_use]
    pub fn merge_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(seed) = parse_var::<u64>(&lookup, "HERO_CLASH_SEED") {
            self.seed = Some(seed);
        }

        if let Some(path) = lookup("HERO_CLASH_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(pause_ms) = parse_var::<u64>(&lookup, "HERO_CLASH_PAUSE_MS") {
            self.pause_ms = pause_ms;
        }

        if let Some(raw) = lookup("HERO_CLASH_SHOW_ROLLS") {
            match parse_flag(&raw) {
                Some(show) => self.show_rolls = show,
                None => tracing::warn!("ignoring HERO_CLASH_SHOW_ROLLS={raw:?}: not a flag"),
            }
        }

        self
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

/// An empty value counts as set.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.pause_ms, 500);
        assert!(!config.show_rolls);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleConfig::default()
            .with_seed(123)
            .with_catalog("heroes.json")
            .with_pause_ms(0)
            .with_show_rolls(true);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.catalog_path, Some(PathBuf::from("heroes.json")));
        assert_eq!(config.pause_ms, 0);
        assert!(config.show_rolls);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BattleConfig::from_json_str(r#"{ "seed": 9 }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pause_ms, 500);
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_seed(77);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = BattleConfig::from_json_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_invalid_json() {
        let err = BattleConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_env_overrides() {
        let config = BattleConfig::default().merge_from(vars(&[
            ("HERO_CLASH_SEED", "42"),
            ("HERO_CLASH_CATALOG", "/tmp/heroes.json"),
            ("HERO_CLASH_PAUSE_MS", " 0 "),
            ("HERO_CLASH_SHOW_ROLLS", "yes"),
        ]));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/heroes.json")));
        assert_eq!(config.pause_ms, 0);
        assert!(config.show_rolls);
    }

    #[test]
    fn test_bad_env_values_keep_defaults() {
        let config = BattleConfig::default().merge_from(vars(&[
            ("HERO_CLASH_SEED", "lucky"),
            ("HERO_CLASH_PAUSE_MS", "abc"),
            ("HERO_CLASH_SHOW_ROLLS", "maybe"),
        ]));

        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn test_env_overrides_apply_on_top() {
        let base = BattleConfig::default().with_seed(7).with_pause_ms(20);
        let config = base.clone().merge_from(vars(&[("HERO_CLASH_PAUSE_MS", "abc")]));
        assert_eq!(config, base);

        let config = base.merge_from(vars(&[]));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(""), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_missing_file() {
        let err = BattleConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
