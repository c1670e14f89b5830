//! Changelog entries: the persisted form of a release decision

use crate::change::aggregate::ReleaseDecision;
use crate::change::record::Severity;
use serde::{Deserialize, Serialize};

/// One released version as stored in both changelog artifacts
///
/// Serializes to the `changelog.json` element shape; field names match the
/// change-file payload where they overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
  pub version: String,
  /// Release date, `YYYY-MM-DD`
  pub date: String,
  #[serde(rename = "type")]
  pub severity: Severity,
  pub comment: String,
  pub author: String,
  #[serde(rename = "issueLinks", default, skip_serializing_if = "Option::is_none")]
  pub issue_links: Option<Vec<String>>,
}

impl ChangelogEntry {
  /// Build the entry for a merged release decision
  pub fn from_decision(decision: &ReleaseDecision) -> Self {
    Self {
      version: decision.bumped_version.clone(),
      date: decision.effective_date.format("%Y-%m-%d").to_string(),
      severity: decision.severity,
      comment: decision.comment.clone(),
      author: decision.author.clone(),
      issue_links: decision.issue_links.clone(),
    }
  }

  /// Render as a markdown changelog section
  pub fn to_markdown(&self) -> String {
    let mut output = String::new();

    output.push_str(&format!("## [{}] - {}\n\n", self.version, self.date));
    output.push_str(&format!("### {}\n\n", section_title(self.severity)));

    if !self.comment.is_empty() {
      output.push_str(&self.comment);
      output.push_str("\n\n");
    }

    output.push_str(&format!("**Authors:** {}\n", self.author));

    if let Some(links) = &self.issue_links {
      output.push_str(&format!("**Issues:** {}\n", links.join(", ")));
    }

    output.push('\n');
    output
  }
}

fn section_title(severity: Severity) -> &'static str {
  match severity {
    Severity::Major => "Major Changes",
    Severity::Minor => "Minor Changes",
    Severity::Patch => "Patch Changes",
    Severity::None => "Other Changes",
  }
}
