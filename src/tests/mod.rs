//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests driving `TuiApp<TestBackend>` with key
//! events, one file per user story.

mod acceptance_filters;
