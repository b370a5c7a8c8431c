//! Webhook protocol: the transport port, reply normalization, and the client
//! that combines them into a call that always yields displayable text.

pub mod client;
pub mod normalize;
pub mod transport;
