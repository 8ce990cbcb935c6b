/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateQuestionDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
}
