//! # triage
//!
//! Application layer around `triage-core`: HTTP API, CLI and configuration.
//!
//! The binary in `main.rs` is a thin wrapper over [`cli::execute`]; the
//! modules are exposed as a library so integration tests can drive the
//! router directly.

pub mod api;
pub mod cli;
pub mod config;
