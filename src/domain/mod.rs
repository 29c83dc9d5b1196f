//! Domain models for the watchtower
//!
//! This module contains the release entries the feed publishes and the
//! baseline the watcher compares them against.

pub mod serialization;
pub mod version;

pub use version::{Baseline, Change, VersionEntry};
