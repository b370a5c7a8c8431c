//! Business logic and port definitions for Heirloom.
//!
//! This crate defines the "ports" (transport and transcript store traits) that
//! the infrastructure layer implements, plus everything that makes decisions:
//! session state, webhook reply normalization, and the chat controller. It
//! depends only on `heirloom-types` -- never on `heirloom-infra` or any
//! network/IO crate.

pub mod chat;
pub mod transcript;
pub mod webhook;
