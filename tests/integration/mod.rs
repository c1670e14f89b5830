//! Integration test harness for changeship
//!
//! Each test drives the compiled binary against a temporary git repository
//! with a local bare remote, so apply can exercise the full
//! merge → bump → commit → push flow without network access.

mod test_add;
mod test_apply;
mod test_status;
