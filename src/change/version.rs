//! Version bumping: the oracle that turns base version + severity into the
//! next version
//!
//! Exposed as a trait so the aggregation pipeline can be exercised in tests
//! without touching a real manifest.

use crate::change::record::Severity;

/// Computes the next version from a base version and a severity
///
/// Returns `None` when no valid bump exists: the base version is not valid
/// semver, or the severity is `none` (a no-op severity has no next version).
pub trait VersionOracle {
  fn bump(&self, base: &str, severity: Severity) -> Option<String>;
}

/// Production oracle backed by the `semver` crate
pub struct SemverOracle;

impl VersionOracle for SemverOracle {
  fn bump(&self, base: &str, severity: Severity) -> Option<String> {
    let mut version: semver::Version = base.parse().ok()?;

    match severity {
      Severity::Major => {
        version.major += 1;
        version.minor = 0;
        version.patch = 0;
      }
      Severity::Minor => {
        version.minor += 1;
        version.patch = 0;
      }
      Severity::Patch => {
        version.patch += 1;
      }
      Severity::None => return None,
    }

    Some(version.to_string())
  }
}
