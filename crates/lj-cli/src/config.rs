//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lj_core::{TraversalLimits, WindowEncoding};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How occurrences are written into backend hour windows.
    #[serde(default)]
    pub window_encoding: WindowEncoding,

    /// Maximum join tree depth. Unbounded when unset.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Reject join trees whose logrepo names loop back on themselves.
    #[serde(default)]
    pub detect_cycles: bool,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (LJ_*)
        figment = figment.merge(Env::prefixed("LJ_"));

        figment.extract()
    }

    /// Traversal limits for the guarded conversions.
    pub const fn limits(&self) -> TraversalLimits {
        TraversalLimits {
            max_depth: self.max_depth,
            detect_cycles: self.detect_cycles,
        }
    }
}

/// Returns the platform-specific config directory for lj.
///
/// On Linux: `~/.config/lj`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lj"))
}
