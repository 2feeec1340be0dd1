//! Core application layer
//!
//! Everything around the color engine that the application owns: config,
//! errors, persisted state, auto mode and palette export.
//!
//! - `config` - TOML configuration
//! - `error` - error types
//! - `state` - generator state and its JSON state file
//! - `auto` - recurring color generation on a background thread
//! - `export` - palette export as JSON or CSS

pub mod auto;
pub mod config;
pub mod error;
pub mod export;
pub mod state;
