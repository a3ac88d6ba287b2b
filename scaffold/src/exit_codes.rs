//! Stable exit codes for the scaffold CLI.

/// Exercise created.
pub const OK: i32 = 0;
/// Missing arguments, unknown level, bad config, or a filesystem failure.
pub const INVALID: i32 = 1;
