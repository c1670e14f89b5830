//! System git backend - zero dependencies
//!
//! Uses git porcelain commands through safe subprocess execution with an
//! isolated environment. The release flow needs exactly four operations:
//! stage, commit, push, and branch resolution.

use crate::core::error::{GitError, ResultExt, ShipError, ShipResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// Performs one subprocess call to verify the path is inside a work tree.
  pub fn open(path: &Path) -> ShipResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(ShipError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(ShipError::message(format!("Failed to open git repository: {}", stderr)));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Get current branch name
  pub fn current_branch(&self) -> ShipResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Resolve the default branch of a remote
  ///
  /// Reads `refs/remotes/<remote>/HEAD`; when that ref is not recorded
  /// locally (fresh remotes, bare test fixtures), falls back to the current
  /// branch.
  pub fn default_branch(&self, remote: &str) -> ShipResult<String> {
    let head_ref = format!("refs/remotes/{}/HEAD", remote);

    let output = self
      .git_cmd()
      .args(["symbolic-ref", "--short", &head_ref])
      .output()
      .context("Failed to resolve remote HEAD")?;

    if output.status.success() {
      let full = String::from_utf8_lossy(&output.stdout).trim().to_string();
      // "origin/main" -> "main"
      if let Some(branch) = full.strip_prefix(&format!("{}/", remote)) {
        return Ok(branch.to_string());
      }
      return Ok(full);
    }

    self.current_branch()
  }

  /// Read a git config value, if set
  pub fn config_value(&self, key: &str) -> ShipResult<Option<String>> {
    let output = self
      .git_cmd()
      .args(["config", "--get", key])
      .output()
      .context("Failed to read git config")?;

    if !output.status.success() {
      return Ok(None);
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
  }

  /// Stage a single path (also records deletions)
  pub fn add(&self, path: &Path) -> ShipResult<()> {
    let output = self
      .git_cmd()
      .args(["add", "--"])
      .arg(path)
      .output()
      .context("Failed to execute git add")?;

    if !output.status.success() {
      return Err(ShipError::Git(GitError::CommandFailed {
        command: format!("git add {}", path.display()),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      }));
    }

    Ok(())
  }

  /// Commit staged changes with the given message
  pub fn commit(&self, message: &str) -> ShipResult<()> {
    let output = self
      .git_cmd()
      .args(["commit", "-m", message])
      .output()
      .context("Failed to execute git commit")?;

    if !output.status.success() {
      return Err(ShipError::Git(GitError::CommandFailed {
        command: "git commit".to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      }));
    }

    Ok(())
  }

  /// Push a branch to a remote
  pub fn push(&self, remote: &str, branch: &str) -> ShipResult<()> {
    let output = self
      .git_cmd()
      .args(["push", remote, branch])
      .output()
      .context("Failed to execute git push")?;

    if !output.status.success() {
      return Err(ShipError::Git(GitError::PushFailed {
        remote: remote.to_string(),
        branch: branch.to_string(),
        reason: String::from_utf8_lossy(&output.stderr).to_string(),
      }));
    }

    Ok(())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }
}
