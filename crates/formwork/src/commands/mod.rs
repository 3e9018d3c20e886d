//! CLI command implementations.

pub mod check;
pub mod init;
pub mod plugins;
pub mod show;
