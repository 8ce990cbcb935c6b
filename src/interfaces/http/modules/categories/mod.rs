//! Category module — public listing, admin-only creation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
