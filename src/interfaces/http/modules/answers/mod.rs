//! Answer module — posting, editing, and deleting answers

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
