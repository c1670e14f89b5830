//! Changelog persistence: CHANGELOG.md and changelog.json
//!
//! Both artifacts live side by side in the changelog directory. New entries
//! are prepended so the newest release reads first. The container files are
//! created on every run, even when there is nothing to release.

use crate::changelog::entry::ChangelogEntry;
use crate::core::error::{ResultExt, ShipResult};
use std::fs;
use std::path::PathBuf;

const TEXT_HEADER: &str = "# Changelog\n\n";

/// Writer for the two changelog artifacts
pub struct ChangelogWriter {
  dir: PathBuf,
}

impl ChangelogWriter {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Path of the markdown changelog
  pub fn text_path(&self) -> PathBuf {
    self.dir.join("CHANGELOG.md")
  }

  /// Path of the structured changelog
  pub fn json_path(&self) -> PathBuf {
    self.dir.join("changelog.json")
  }

  /// Create both container files when missing; existing content is untouched
  pub fn ensure_files(&self) -> ShipResult<()> {
    if !self.dir.exists() {
      fs::create_dir_all(&self.dir).with_context(|| format!("Failed to create {}", self.dir.display()))?;
    }

    let text_path = self.text_path();
    if !text_path.exists() {
      fs::write(&text_path, TEXT_HEADER).with_context(|| format!("Failed to create {}", text_path.display()))?;
    }

    let json_path = self.json_path();
    if !json_path.exists() {
      fs::write(&json_path, "[]\n").with_context(|| format!("Failed to create {}", json_path.display()))?;
    }

    Ok(())
  }

  /// Prepend one entry to both artifacts
  pub fn prepend(&self, entry: &ChangelogEntry) -> ShipResult<()> {
    self.ensure_files()?;
    self.prepend_text(entry)?;
    self.prepend_json(entry)
  }

  fn prepend_text(&self, entry: &ChangelogEntry) -> ShipResult<()> {
    let path = self.text_path();
    let existing = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let rendered = entry.to_markdown();

    // Insert right after the "# Changelog" header so older entries follow
    let new_content = if let Some(header_end) = existing.find("\n\n") {
      let (header, rest) = existing.split_at(header_end + 2);
      format!("{}{}{}", header, rendered, rest)
    } else {
      format!("{}{}", existing, rendered)
    };

    fs::write(&path, new_content).with_context(|| format!("Failed to write {}", path.display()))
  }

  fn prepend_json(&self, entry: &ChangelogEntry) -> ShipResult<()> {
    let path = self.json_path();
    let existing = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut entries: Vec<ChangelogEntry> =
      serde_json::from_str(&existing).with_context(|| format!("Failed to parse {}", path.display()))?;
    entries.insert(0, entry.clone());

    let mut out = serde_json::to_string_pretty(&entries)?;
    out.push('\n');
    fs::write(&path, out).with_context(|| format!("Failed to write {}", path.display()))
  }
}
