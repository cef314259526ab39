//! Configuration types for histload.
//!
//! [`ImportConfig::load`] layers an optional `config.toml` and `HISTLOAD_*`
//! environment variables over the built-in defaults. [`ImportConfig::defaults`]
//! returns the same defaults without touching the filesystem or environment
//! (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
path = "historicalEvents.json"

[mongo]
uri        = "mongodb://localhost:27017"
database   = "historical_events"
collection = "events"

[report]
sample_size = 5
"#;

const ENV_PREFIX: &str = "HISTLOAD";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration for one import run.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub mongo: MongoConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[source]` section: where the event file is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

fn default_source_path() -> PathBuf { PathBuf::from("historicalEvents.json") }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

/// `[mongo]` section: destination store.
#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String { "mongodb://localhost:27017".to_string() }
fn default_database() -> String { "historical_events".to_string() }
fn default_collection() -> String { "events".to_string() }

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// How many stored records to sample for the final dump.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_sample_size() -> usize { 5 }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ImportConfig {
    /// Load `path` (or the user config file when `None`) layered on top of the
    /// built-in defaults, then apply `HISTLOAD_*` environment overrides such as
    /// `HISTLOAD_MONGO__URI`.
    ///
    /// An explicitly given `path` must exist; the user config file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("histload")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
