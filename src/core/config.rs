//! Configuration for changeship
//!
//! All values have defaults; a `changeship.toml` at the package root may
//! override them, and CLI flags override both. None of these values affect
//! the aggregation itself, only where the collaborators read and write.

use crate::core::error::{ResultExt, ShipResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory holding pending change files
pub const DEFAULT_CHANGES_DIR: &str = ".changes";

/// Default directory holding CHANGELOG.md and changelog.json
pub const DEFAULT_CHANGELOG_DIR: &str = ".";

/// Default git remote for the release push
pub const DEFAULT_REMOTE: &str = "origin";

/// Commit message used for every release commit
pub const COMMIT_MESSAGE: &str = "chore(changelog): apply change file [ci skip]";

/// Optional file-based configuration
/// Searched in order: changeship.toml, .changeship.toml, .config/changeship.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipConfig {
  /// Directory holding pending change files
  #[serde(default)]
  pub changes: Option<PathBuf>,

  /// Directory holding the changelog artifacts
  #[serde(default)]
  pub changelog: Option<PathBuf>,

  /// Git remote to push to
  #[serde(default)]
  pub remote: Option<String>,

  /// Target branch; defaults to the remote's default branch
  #[serde(default)]
  pub branch: Option<String>,
}

impl ShipConfig {
  /// Find config file in search order
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    let candidates = vec![
      root.join("changeship.toml"),
      root.join(".changeship.toml"),
      root.join(".config").join("changeship.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load the config file if one exists, defaults otherwise
  pub fn load(root: &Path) -> ShipResult<Self> {
    let Some(path) = Self::find_config_path(root) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    toml_edit::de::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
  }
}

/// Fully resolved settings: file config plus CLI overrides
#[derive(Debug, Clone)]
pub struct Settings {
  pub change_dir: PathBuf,
  pub changelog_dir: PathBuf,
  pub remote: String,
  /// `None` means: resolve the remote's default branch at apply time
  pub branch: Option<String>,
}

impl Settings {
  /// Resolve settings for a run; each CLI override wins over the config file
  pub fn resolve(
    root: &Path,
    change_dir: Option<PathBuf>,
    changelog_dir: Option<PathBuf>,
    remote: Option<String>,
    branch: Option<String>,
  ) -> ShipResult<Self> {
    let config = ShipConfig::load(root)?;

    Ok(Self {
      change_dir: change_dir
        .or(config.changes)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGES_DIR)),
      changelog_dir: changelog_dir
        .or(config.changelog)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_DIR)),
      remote: remote.or(config.remote).unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
      branch: branch.or(config.branch),
    })
  }
}
