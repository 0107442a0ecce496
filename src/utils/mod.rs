//! Process-level helpers for the server binary.
pub mod logging;
