//! Apply command implementation
//!
//! Merges every pending change file into one changelog entry, bumps the
//! package version, deletes the consumed files, then commits and pushes.
//! The merge itself is pure; no file or git mutation happens until the
//! decision (including the version bump) has succeeded.

use crate::change::{ChangeStore, FsChangeStore, SemverOracle, aggregate};
use crate::changelog::{ChangelogEntry, ChangelogWriter};
use crate::core::config::{COMMIT_MESSAGE, Settings};
use crate::core::error::ShipResult;
use crate::core::manifest;
use crate::core::vcs::SystemGit;
use chrono::Utc;
use std::env;
use std::path::PathBuf;

/// Run the apply command
pub fn run_apply(
  location: Option<PathBuf>,
  changelog: Option<PathBuf>,
  remote: Option<String>,
  branch: Option<String>,
  dry_run: bool,
) -> ShipResult<()> {
  let root = env::current_dir()?;
  let settings = Settings::resolve(&root, location, changelog, remote, branch)?;

  // Container files exist after every run, even with nothing to release
  let writer = ChangelogWriter::new(root.join(&settings.changelog_dir));
  writer.ensure_files()?;

  let store = FsChangeStore::new(root.join(&settings.change_dir));
  let sources = store.list()?;

  let mut records = Vec::with_capacity(sources.len());
  for source in &sources {
    records.push(store.read(source)?);
  }

  let manifest_path = root.join("Cargo.toml");
  let base_version = manifest::read_version(&manifest_path)?;

  let Some(decision) = aggregate(&mut records, &base_version, &SemverOracle, Utc::now())? else {
    println!("✅ No pending change files; nothing to release");
    return Ok(());
  };

  println!("📦 Release {} → {} ({})", base_version, decision.bumped_version, decision.severity);
  println!("   {} change file(s) by {}", records.len(), decision.author);
  if let Some(links) = &decision.issue_links {
    println!("   Issues: {}", links.join(", "));
  }

  if dry_run {
    println!();
    println!("🔍 Dry-run mode (no changes applied)");
    return Ok(());
  }

  // Resolve the push target before mutating anything
  let repo = SystemGit::open(&root)?;
  let target_branch = match &settings.branch {
    Some(branch) => branch.clone(),
    None => repo.default_branch(&settings.remote)?,
  };

  // 1. Prepend the merged entry to both changelog artifacts
  writer.prepend(&ChangelogEntry::from_decision(&decision))?;

  // 2. Delete all consumed change files and stage the deletions
  for record in &records {
    store.delete(&record.source)?;
    repo.add(&record.source)?;
  }

  // 3. Persist the bumped version and stage the remaining artifacts
  manifest::write_version(&manifest_path, &decision.bumped_version)?;
  repo.add(&manifest_path)?;
  repo.add(&writer.text_path())?;
  repo.add(&writer.json_path())?;

  // 4. One commit, one push
  repo.commit(COMMIT_MESSAGE)?;
  repo.push(&settings.remote, &target_branch)?;

  println!();
  println!("✅ Released {} to {}/{}", decision.bumped_version, settings.remote, target_branch);

  Ok(())
}
