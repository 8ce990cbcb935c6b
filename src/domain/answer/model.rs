use chrono::{DateTime, Utc};

/// Answer model
#[derive(Clone, Debug)]
pub struct Answer {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    pub question_id: String,
    pub is_accepted: bool,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
