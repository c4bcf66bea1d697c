//! Structured logging for the plugin.
//!
//! Events and spans from the `tracing` macros are filtered by level and
//! written as plain text to stderr, which Zellij collects into its log file.
//!
//! # Configuration
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Any `EnvFilter` directive works, e.g.
//! `"dropdown_menu::menu=trace,info"`.
//!
//! # Usage
//!
//! ```rust
//! use dropdown_menu::observability::init_tracing;
//! use dropdown_menu::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod init;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
