//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod answer_repository;
pub mod category_repository;
pub mod question_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a SeaORM error to a domain error, detecting uniqueness violations.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}
