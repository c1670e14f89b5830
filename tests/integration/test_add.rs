//! Integration tests for `changeship add`

use crate::helpers::{TestPackage, run_changeship, run_changeship_raw};
use anyhow::Result;

#[test]
fn test_add_creates_change_file() -> Result<()> {
  let pkg = TestPackage::new()?;

  run_changeship(
    &pkg.path,
    &[
      "add",
      "--kind",
      "minor",
      "--comment",
      "Add feature",
      "--author",
      "Author1",
      "--issue",
      "#12",
      "--issue",
      "#34",
    ],
  )?;

  let entries: Vec<_> = std::fs::read_dir(pkg.path.join(".changes"))?.collect();
  assert_eq!(entries.len(), 1);

  let path = entries[0].as_ref().unwrap().path();
  let name = path.file_name().unwrap().to_string_lossy().to_string();
  assert!(name.starts_with("change-"));
  assert!(name.ends_with(".json"));

  let payload: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
  assert_eq!(payload["type"], "minor");
  assert_eq!(payload["comment"], "Add feature");
  assert_eq!(payload["author"], "Author1");
  assert_eq!(payload["issueLinks"][0], "#12");
  assert_eq!(payload["issueLinks"][1], "#34");

  Ok(())
}

#[test]
fn test_add_defaults_author_from_git_config() -> Result<()> {
  let pkg = TestPackage::new()?;

  run_changeship(&pkg.path, &["add", "--kind", "patch", "--comment", "Fix bug"])?;

  let entries: Vec<_> = std::fs::read_dir(pkg.path.join(".changes"))?.collect();
  let path = entries[0].as_ref().unwrap().path();
  let payload: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;

  assert_eq!(payload["author"], "Test User");
  assert!(payload.get("issueLinks").is_none());

  Ok(())
}

#[test]
fn test_add_file_name_carries_a_parseable_date() -> Result<()> {
  let pkg = TestPackage::new()?;

  run_changeship(&pkg.path, &["add", "--kind", "patch", "--comment", "Fix", "--author", "A"])?;

  // The date embedded in the name is what apply sorts by; status echoes it
  let output = run_changeship(&pkg.path, &["status", "--json"])?;
  let pending: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert!(pending[0]["date"].is_string());

  Ok(())
}

#[test]
fn test_add_rejects_unknown_kind() -> Result<()> {
  let pkg = TestPackage::new()?;

  let output = run_changeship_raw(&pkg.path, &["add", "--kind", "huge", "--comment", "x", "--author", "A"])?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Unknown change type"));
  assert!(!pkg.file_exists(".changes"));

  Ok(())
}
