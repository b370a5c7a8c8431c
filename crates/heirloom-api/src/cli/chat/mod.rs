//! Interactive chat in the terminal.
//!
//! Reads questions with an async line editor, forwards them through the
//! chat controller, and renders replies as markdown. Slash commands cover
//! session management and transcripts. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
