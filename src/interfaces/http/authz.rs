//! Authorization predicates
//!
//! Applied by resource handlers after authentication succeeds; kept out of
//! the middleware so authentication and authorization stay decoupled.
//! Policy note: question/answer *update* is owner-only while *delete* admits
//! owner-or-admin. The asymmetry is inherited product behavior.

use super::middleware::AuthenticatedUser;

/// Does the authenticated user own the resource?
///
/// Identifiers are compared as strings; both sides come from the same store
/// but may have passed through different representations.
pub fn is_owner(owner_id: &str, user: &AuthenticatedUser) -> bool {
    owner_id == user.id
}

/// Owner-or-admin rule used by delete handlers
pub fn is_owner_or_admin(owner_id: &str, user: &AuthenticatedUser) -> bool {
    is_owner(owner_id, user) || user.is_admin
}
