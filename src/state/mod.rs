//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `upload`, `history`, `notice`)
//! so individual pages and components depend on small focused models.
//! Each model is a plain struct held in an `RwSignal` provided via
//! context by the root component; the structs themselves stay free of
//! browser types so they test natively.

pub mod history;
pub mod notice;
pub mod session;
pub mod upload;
