#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    /// Plaintext password; hashed by the repository before storage
    pub password: String,
    pub is_admin: bool,
}
