//! Shared domain types for Heirloom.
//!
//! This crate contains the core domain types used across the Heirloom chat
//! front-end: messages, webhook wire shapes, transcripts, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod transcript;
pub mod webhook;
