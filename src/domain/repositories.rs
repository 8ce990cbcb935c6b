//! Repository provider trait
//!
//! Unified access to all per-aggregate repositories. Consumers hold one
//! `Arc<dyn RepositoryProvider>` and request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) -> DomainResult<()> {
//!     let user = repos.users().get_user_by_id("u-1").await?;
//!     ...
//! }
//! ```

use super::answer::AnswerRepositoryInterface;
use super::category::CategoryRepositoryInterface;
use super::question::QuestionRepositoryInterface;
use super::user::UserRepositoryInterface;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepositoryInterface;
    fn categories(&self) -> &dyn CategoryRepositoryInterface;
    fn questions(&self) -> &dyn QuestionRepositoryInterface;
    fn answers(&self) -> &dyn AnswerRepositoryInterface;
}
