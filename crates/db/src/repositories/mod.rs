//! Repository layer.
//!
//! [`MovieRepository`] is the storage-agnostic contract; each backend has
//! one implementation holding a pool handle.

pub mod movie_repo;
pub mod pg_movie_repo;
pub mod sqlite_movie_repo;

pub use movie_repo::{MovieRepository, RepoError, RepoResult};
pub use pg_movie_repo::PgMovieRepo;
pub use sqlite_movie_repo::SqliteMovieRepo;
