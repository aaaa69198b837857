//! Session management: token persistence, claims decoding, route
//! guarding, and background token refresh.

pub mod claims;
pub mod guard;
pub mod refresh;
pub mod token;
