//! Deterministic, pure logic for the scaffolder.
//!
//! Core modules must be free of I/O side effects. They validate arguments and
//! render output from in-memory values so they can be tested in isolation.

pub mod args;
pub mod level;
pub mod readme;
