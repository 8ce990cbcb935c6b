//! # Askboard
//!
//! Backend of a question-and-answer web application: users register, log in,
//! browse categories, post questions, and post answers.
//!
//! ## Architecture
//!
//! - **domain**: Core entities, DTOs, repository interfaces, and errors
//! - **infrastructure**: External concerns (SeaORM database, JWT/bcrypt crypto)
//! - **interfaces**: REST API with Swagger documentation, auth middleware,
//!   and per-resource handler modules
//! - **shared**: Small cross-layer types (pagination)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
