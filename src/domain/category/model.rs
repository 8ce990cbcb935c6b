use chrono::{DateTime, Utc};

/// Question category
#[derive(Clone, Debug)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
