//! Network layer: wire types and the sales backend client.

pub mod api;
pub mod types;
