//! SQLite implementation of [`MovieRepository`].
//!
//! Works against a database file or an in-memory database; the latter is
//! what the test suites use for a fresh store per test.

use async_trait::async_trait;
use cinelog_core::types::MovieId;
use sqlx::SqlitePool;

use super::movie_repo::{require_row, MovieRepository, RepoResult, COLUMNS};
use crate::models::movie::Movie;

/// Movie repository backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteMovieRepo {
    pool: SqlitePool,
}

impl SqliteMovieRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepo {
    async fn list(&self) -> RepoResult<Vec<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies");
        let movies = sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(movies)
    }

    async fn get_by_id(&self, id: MovieId) -> RepoResult<Option<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn add(&self, movie: &mut Movie) -> RepoResult<()> {
        let id = MovieId::new_v4();
        sqlx::query("INSERT INTO movies (id, name, director) VALUES (?, ?, ?)")
            .bind(id)
            .bind(&movie.name)
            .bind(&movie.director)
            .execute(&self.pool)
            .await?;
        movie.id = id;
        tracing::debug!(movie_id = %id, "Movie added");
        Ok(())
    }

    async fn edit(&self, movie: &Movie) -> RepoResult<()> {
        let result = sqlx::query("UPDATE movies SET name = ?, director = ? WHERE id = ?")
            .bind(&movie.name)
            .bind(&movie.director)
            .bind(movie.id)
            .execute(&self.pool)
            .await?;
        require_row(result.rows_affected(), movie.id)?;
        tracing::debug!(movie_id = %movie.id, "Movie updated");
        Ok(())
    }

    async fn delete(&self, movie: &Movie) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(movie.id)
            .execute(&self.pool)
            .await?;
        require_row(result.rows_affected(), movie.id)?;
        tracing::debug!(movie_id = %movie.id, "Movie deleted");
        Ok(())
    }
}
