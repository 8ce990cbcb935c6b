//! HTTP REST API interfaces
//!
//! - `middleware`: JWT authentication middleware + admin gate
//! - `authz`: ownership/admin authorization predicates used by handlers
//! - `modules`: per-resource DTOs and handlers
//! - `router`: API router with Swagger documentation

pub mod authz;
pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
