//! Repository contract for the `movies` table.

use async_trait::async_trait;
use cinelog_core::types::MovieId;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, director";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Movie with id {id} not found")]
    NotFound { id: MovieId },

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Create/read/update/delete access to stored movies.
///
/// Implementations hold nothing but a pool handle. Each call checks out
/// its own connection for one statement, so a repository can be shared
/// between tasks. Mutating calls return only after the store has
/// acknowledged the write; failures are returned as-is, never retried.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// All stored movies, in no particular order.
    async fn list(&self) -> RepoResult<Vec<Movie>>;

    /// Look up a movie by id. `Ok(None)` when no such movie exists.
    async fn get_by_id(&self, id: MovieId) -> RepoResult<Option<Movie>>;

    /// Insert `movie` under a freshly generated id.
    ///
    /// Any id already on `movie` is ignored. The new id is written back to
    /// `movie` only once the insert succeeded.
    async fn add(&self, movie: &mut Movie) -> RepoResult<()>;

    /// Overwrite `name` and `director` of the stored movie with `movie.id`.
    ///
    /// Returns [`RepoError::NotFound`] if no such movie exists.
    async fn edit(&self, movie: &Movie) -> RepoResult<()>;

    /// Permanently remove the stored movie with `movie.id`.
    ///
    /// Returns [`RepoError::NotFound`] if no such movie exists.
    async fn delete(&self, movie: &Movie) -> RepoResult<()>;
}

/// Turn an affected-row count into `NotFound` when nothing matched `id`.
pub(crate) fn require_row(rows_affected: u64, id: MovieId) -> RepoResult<()> {
    if rows_affected == 0 {
        Err(RepoError::NotFound { id })
    } else {
        Ok(())
    }
}
