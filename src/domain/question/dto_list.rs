#[derive(Debug, Clone, Default)]
pub struct ListQuestionsDto {
    pub category_id: Option<String>,
    /// Substring match against title or content
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
