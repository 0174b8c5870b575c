//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `ABPGEN__SECTION__KEY`
//! 3. Config file: `--config FILE`, else `./abpgen.toml`, else the user file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Per-solution configuration file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "abpgen.toml";

const ENV_PREFIX: &str = "ABPGEN";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solution: SolutionConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

/// Where the solution lives and what it is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionConfig {
    /// Solution directory used when `--solution` is not given.
    pub dir: Option<PathBuf>,
    /// Overrides the name detected from the `.sln` file.
    pub app_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose `*.j2` files replace the built-in templates.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Show a progress bar while generating.
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            progress: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.progress", defaults.output.progress)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder.add_source(File::from(Self::active_path()).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user-level configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `./abpgen.toml`.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "abpgen", "abpgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `load(None)` reads: `./abpgen.toml` when present, otherwise
    /// the user-level file.
    pub fn active_path() -> PathBuf {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local.to_path_buf()
        } else {
            Self::config_path()
        }
    }

    /// Serialise as TOML (for `init` and `config show`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
