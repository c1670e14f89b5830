//! Core building blocks shared by all commands
//!
//! - **config**: defaults, changeship.toml parsing, CLI override resolution
//! - **error**: unified error type with exit codes and help messages
//! - **manifest**: Cargo.toml version read/write (lossless)
//! - **vcs**: git operations (SystemGit)

pub mod config;
pub mod error;
pub mod manifest;
pub mod vcs;
