use crate::types::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("Conflict: {0}")]
    Conflict(String),
}
