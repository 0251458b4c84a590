//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `HistoryError`, so functions can simply return
//! `Result<T>`.
use crate::error::HistoryError;

/// Workspace-wide `Result` alias with `HistoryError` as the default error.
pub type Result<T, E = HistoryError> = std::result::Result<T, E>;
