//! Package manifest access: read and persist the version in Cargo.toml
//!
//! Uses lossless TOML editing so version bumps never disturb formatting or
//! comments in the manifest.

use crate::core::error::{ConfigError, ResultExt, ShipError, ShipResult};
use std::fs;
use std::path::Path;

/// Read the `[package]` version from a manifest
pub fn read_version(manifest: &Path) -> ShipResult<String> {
  let content = fs::read_to_string(manifest).with_context(|| format!("Failed to read {}", manifest.display()))?;

  let doc: toml_edit::DocumentMut = content
    .parse()
    .with_context(|| format!("Failed to parse {}", manifest.display()))?;

  doc
    .get("package")
    .and_then(|p| p.get("version"))
    .and_then(|v| v.as_str())
    .map(str::to_string)
    .ok_or_else(|| {
      ShipError::Config(ConfigError::VersionNotFound {
        manifest: manifest.to_path_buf(),
      })
    })
}

/// Rewrite the `[package]` version, preserving manifest formatting
pub fn write_version(manifest: &Path, version: &str) -> ShipResult<()> {
  let content = fs::read_to_string(manifest).with_context(|| format!("Failed to read {}", manifest.display()))?;

  let mut doc: toml_edit::DocumentMut = content
    .parse()
    .with_context(|| format!("Failed to parse {}", manifest.display()))?;

  let Some(package) = doc.get_mut("package").and_then(|p| p.as_table_mut()) else {
    return Err(ShipError::Config(ConfigError::VersionNotFound {
      manifest: manifest.to_path_buf(),
    }));
  };
  package["version"] = toml_edit::value(version);

  fs::write(manifest, doc.to_string()).with_context(|| format!("Failed to write {}", manifest.display()))
}
