//! CLI integration tests for ppqs.

mod check_tests;
mod list_tests;
mod show_tests;
