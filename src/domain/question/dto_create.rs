#[derive(Debug, Clone)]
pub struct CreateQuestionDto {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: String,
}
