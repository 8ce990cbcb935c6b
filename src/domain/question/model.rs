use chrono::{DateTime, Utc};

/// Question model
///
/// `author_username` and `category_name` are resolved by the repository
/// join so handlers never do a second lookup per row.
#[derive(Clone, Debug)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    pub category_id: String,
    pub category_name: String,
    pub views: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
