/// Partial update; `None` keeps the stored content
#[derive(Debug, Clone, Default)]
pub struct UpdateAnswerDto {
    pub content: Option<String>,
}
