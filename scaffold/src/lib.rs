//! Exercise scaffolder.
//!
//! Creates a new exercise directory (`<level>/<name>`) by copying the
//! template tree, then renders the README index row for it. The crate keeps
//! the runner-style split:
//!
//! - **[`core`]**: Pure logic (levels, argument validation, readme rendering).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, path layout, recursive copy).
//!
//! [`create`] coordinates the two to implement the CLI command.

pub mod core;
pub mod create;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
