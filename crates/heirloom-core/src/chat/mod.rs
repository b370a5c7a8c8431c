//! Conversation state and orchestration.
//!
//! `SessionStore` owns the session id and history; `ChatController` wires it
//! to the webhook client and transcript writer behind the UI boundary.

pub mod controller;
pub mod session;
