//! Integration tests for `changeship apply`

use crate::helpers::{TestPackage, git, run_changeship, run_changeship_raw};
use anyhow::Result;

#[test]
fn test_apply_merges_change_files() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "change-2023-01-01.json",
    r#"{"type":"patch","comment":"Fix bug 1","author":"Author1","issueLinks":["link1","link2"]}"#,
  )?;
  pkg.write_change(
    "change-2023-01-02.json",
    r#"{"type":"major","comment":"Breaking change","author":"Author2","issueLinks":["link2","link3"]}"#,
  )?;
  pkg.write_change(
    "change-2023-01-03.json",
    r#"{"type":"minor","comment":"Add feature","author":"Author1","issueLinks":["link4"]}"#,
  )?;
  pkg.commit("Add change files")?;

  run_changeship(&pkg.path, &["apply"])?;

  // Version bumped by the highest severity across all files
  let manifest = pkg.read_file("Cargo.toml")?;
  assert!(manifest.contains("version = \"2.0.0\""));

  // Merged entry: newest comment first, distinct authors and links
  let changelog = pkg.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("## [2.0.0] - 2023-01-03"));
  assert!(changelog.contains("### Major Changes"));
  assert!(changelog.contains("Add feature\n\nBreaking change\n\nFix bug 1"));
  assert!(changelog.contains("**Authors:** Author1, Author2"));
  assert!(changelog.contains("**Issues:** link4, link2, link3, link1"));

  let entries: serde_json::Value = serde_json::from_str(&pkg.read_file("changelog.json")?)?;
  assert_eq!(entries[0]["version"], "2.0.0");
  assert_eq!(entries[0]["type"], "major");
  assert_eq!(entries[0]["author"], "Author1, Author2");

  // All change files consumed
  assert!(!pkg.file_exists(".changes/change-2023-01-01.json"));
  assert!(!pkg.file_exists(".changes/change-2023-01-02.json"));
  assert!(!pkg.file_exists(".changes/change-2023-01-03.json"));

  // Exactly one release commit, pushed to the remote
  assert_eq!(pkg.last_commit_message()?, "chore(changelog): apply change file [ci skip]");
  let local_head = git(&pkg.path, &["rev-parse", "HEAD"])?;
  let local_head = String::from_utf8_lossy(&local_head.stdout).trim().to_string();
  assert_eq!(pkg.remote_head("main")?, local_head);

  Ok(())
}

#[test]
fn test_apply_without_change_files_only_ensures_containers() -> Result<()> {
  let pkg = TestPackage::new()?;
  let commits_before = pkg.commit_count()?;

  let output = run_changeship(&pkg.path, &["apply"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("nothing to release"));

  // Containers created, nothing else touched
  assert_eq!(pkg.read_file("CHANGELOG.md")?, "# Changelog\n\n");
  assert_eq!(pkg.read_file("changelog.json")?, "[]\n");
  assert!(pkg.read_file("Cargo.toml")?.contains("version = \"1.0.0\""));
  assert_eq!(pkg.commit_count()?, commits_before);

  Ok(())
}

#[test]
fn test_apply_fails_without_valid_bump() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "change-2023-01-01.json",
    r#"{"type":"none","comment":"Docs only","author":"Author1"}"#,
  )?;
  pkg.commit("Add change file")?;
  let commits_before = pkg.commit_count()?;

  let output = run_changeship_raw(&pkg.path, &["apply"])?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Cannot bump version"));

  // No mutation: version intact, change file intact, no entry, no commit
  assert!(pkg.read_file("Cargo.toml")?.contains("version = \"1.0.0\""));
  assert!(pkg.file_exists(".changes/change-2023-01-01.json"));
  assert!(!pkg.read_file("CHANGELOG.md")?.contains("## ["));
  assert_eq!(pkg.commit_count()?, commits_before);

  Ok(())
}

#[test]
fn test_apply_dry_run_makes_no_changes() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "change-2023-01-01.json",
    r#"{"type":"minor","comment":"Add feature","author":"Author1"}"#,
  )?;
  pkg.commit("Add change file")?;
  let commits_before = pkg.commit_count()?;

  let output = run_changeship(&pkg.path, &["apply", "--dry-run"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("1.0.0 → 1.1.0"));
  assert!(stdout.contains("Dry-run"));

  assert!(pkg.read_file("Cargo.toml")?.contains("version = \"1.0.0\""));
  assert!(pkg.file_exists(".changes/change-2023-01-01.json"));
  assert_eq!(pkg.commit_count()?, commits_before);

  Ok(())
}

#[test]
fn test_apply_undated_files_trail_dated_ones() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "a-first-undated.json",
    r#"{"type":"patch","comment":"First undated","author":"Author1"}"#,
  )?;
  pkg.write_change(
    "change-2023-06-01.json",
    r#"{"type":"patch","comment":"Dated","author":"Author2"}"#,
  )?;
  pkg.write_change(
    "z-second-undated.json",
    r#"{"type":"patch","comment":"Second undated","author":"Author3"}"#,
  )?;
  pkg.commit("Add change files")?;

  run_changeship(&pkg.path, &["apply"])?;

  let changelog = pkg.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("Dated\n\nFirst undated\n\nSecond undated"));
  assert!(changelog.contains("**Authors:** Author2, Author1, Author3"));

  // Entry date comes from the only dated file
  assert!(changelog.contains("## [1.0.1] - 2023-06-01"));

  Ok(())
}

#[test]
fn test_apply_respects_location_overrides() -> Result<()> {
  let pkg = TestPackage::new()?;

  let dir = pkg.path.join("pending");
  std::fs::create_dir_all(&dir)?;
  std::fs::write(
    dir.join("change-2023-02-01.json"),
    r#"{"type":"patch","comment":"Fix","author":"Author1"}"#,
  )?;
  pkg.commit("Add change file")?;

  run_changeship(&pkg.path, &["apply", "--location", "pending", "--changelog", "docs"])?;

  assert!(pkg.file_exists("docs/CHANGELOG.md"));
  assert!(pkg.file_exists("docs/changelog.json"));
  assert!(!pkg.file_exists("pending/change-2023-02-01.json"));
  assert!(pkg.read_file("Cargo.toml")?.contains("version = \"1.0.1\""));

  Ok(())
}
