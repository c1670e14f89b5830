//! Integration tests for `changeship status`

use crate::helpers::{TestPackage, run_changeship};
use anyhow::Result;

#[test]
fn test_status_lists_pending_changes() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "change-2023-01-02.json",
    r#"{"type":"minor","comment":"Add feature","author":"Author1"}"#,
  )?;
  pkg.write_change(
    "undated-change.json",
    r#"{"type":"patch","comment":"Fix bug","author":"Author2"}"#,
  )?;

  let output = run_changeship(&pkg.path, &["status"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("change-2023-01-02.json"));
  assert!(stdout.contains("minor"));
  assert!(stdout.contains("2023-01-02"));
  assert!(stdout.contains("undated-change.json"));
  assert!(stdout.contains("Author2"));

  Ok(())
}

#[test]
fn test_status_json_output() -> Result<()> {
  let pkg = TestPackage::new()?;

  pkg.write_change(
    "change-2023-01-02.json",
    r#"{"type":"minor","comment":"Add feature","author":"Author1"}"#,
  )?;
  pkg.write_change(
    "undated-change.json",
    r#"{"type":"patch","comment":"Fix bug","author":"Author2"}"#,
  )?;

  let output = run_changeship(&pkg.path, &["status", "--json"])?;
  let pending: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(pending.as_array().unwrap().len(), 2);
  assert_eq!(pending[0]["file"], "change-2023-01-02.json");
  assert_eq!(pending[0]["type"], "minor");
  assert_eq!(pending[0]["date"], "2023-01-02");
  assert_eq!(pending[1]["file"], "undated-change.json");
  assert!(pending[1]["date"].is_null());

  Ok(())
}

#[test]
fn test_status_with_no_pending_changes() -> Result<()> {
  let pkg = TestPackage::new()?;

  let output = run_changeship(&pkg.path, &["status"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("No pending change files"));

  Ok(())
}
