//! Infrastructure layer for Heirloom.
//!
//! Contains implementations of the ports defined in `heirloom-core`: the
//! reqwest-backed webhook transport and the JSON-file transcript store. Also
//! owns data directory resolution and `config.toml` loading.

pub mod config;
pub mod filesystem;
pub mod transcript;
pub mod webhook;
