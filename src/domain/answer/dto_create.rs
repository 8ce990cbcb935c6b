#[derive(Debug, Clone)]
pub struct CreateAnswerDto {
    pub content: String,
    pub author_id: String,
    pub question_id: String,
}
