//! Command implementations for the watchtower CLI

pub mod check;
pub mod completions;
pub mod show;
pub mod version;
pub mod watch;
