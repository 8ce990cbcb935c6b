//! Question module — listing, detail, and owner-gated mutation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
