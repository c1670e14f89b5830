//! Change-file domain: records, storage, aggregation, version bumping
//!
//! - **record**: change-file payloads and the severity ranking
//! - **store**: filesystem change-file enumeration, loading, deletion
//! - **aggregate**: the pure merge of all pending records into one decision
//! - **version**: base version + severity → next version

pub mod aggregate;
pub mod record;
pub mod store;
pub mod version;

pub use aggregate::{ReleaseDecision, aggregate};
pub use record::{ChangePayload, ChangeRecord, Severity};
pub use store::{ChangeStore, FsChangeStore};
pub use version::{SemverOracle, VersionOracle};
