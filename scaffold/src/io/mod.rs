//! I/O helpers for the scaffolder.

pub mod config;
pub mod copy;
pub mod paths;
