//! Network layer: wire types, the error taxonomy, and the REST calls.

pub mod api;
pub mod error;
pub mod types;
