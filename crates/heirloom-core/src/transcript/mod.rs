//! Transcript persistence: the storage port and the writer that snapshots a
//! session into it.

pub mod store;
pub mod writer;
