use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post with ID {id} not found")]
    PostNotFound { id: String },
    #[error("No posts available")]
    NoPosts,
}

impl DomainError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        Self::PostNotFound { id: id.into() }
    }
}
