#[derive(Debug, Clone)]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: String,
    pub created_by: String,
}
