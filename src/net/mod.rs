//! Network layer: wire types shared with the Spring gateway and the REST
//! helpers that talk to it.

pub mod api;
pub mod types;
