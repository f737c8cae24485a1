//! Testing infrastructure for profile-widgets tests.
//!
//! - `fixtures`: sample users, including the awkward ones
//! - `TestWorld`: isolated temp directory for running the CLI

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
