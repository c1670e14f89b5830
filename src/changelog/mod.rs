//! Changelog artifacts: entry rendering and file persistence

pub mod entry;
pub mod writer;

pub use entry::ChangelogEntry;
pub use writer::ChangelogWriter;
