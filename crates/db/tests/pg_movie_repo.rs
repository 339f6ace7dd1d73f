//! PostgreSQL repository tests.
//!
//! These need a reachable server in `DATABASE_URL`; run them with
//! `cargo test -p cinelog-db -- --ignored`.

use cinelog_core::types::MovieId;
use cinelog_db::models::movie::Movie;
use cinelog_db::repositories::{MovieRepository, PgMovieRepo, RepoError};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations/postgres")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_add_then_list(pool: PgPool) {
    let repo = PgMovieRepo::new(pool);

    let mut movie = Movie::new("test_movie_1", Some("Shelby Mansker".to_string()));
    repo.add(&mut movie).await.unwrap();
    assert!(movie.is_persisted());

    let movies = repo.list().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].name, "test_movie_1");
}

#[sqlx::test(migrations = "../../db/migrations/postgres")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_edit_then_get(pool: PgPool) {
    let repo = PgMovieRepo::new(pool);

    let mut movie = Movie::new("Life Sucks", None);
    repo.add(&mut movie).await.unwrap();

    movie.name = "Life is Awesome".to_string();
    repo.edit(&movie).await.unwrap();

    let found = repo.get_by_id(movie.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Life is Awesome");
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations/postgres")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_missing_rows_are_not_found(pool: PgPool) {
    let repo = PgMovieRepo::new(pool);

    let mut ghost = Movie::new("Ghost", None);
    ghost.id = MovieId::new_v4();

    assert!(repo.get_by_id(ghost.id).await.unwrap().is_none());
    assert!(matches!(repo.edit(&ghost).await, Err(RepoError::NotFound { .. })));
    assert!(matches!(repo.delete(&ghost).await, Err(RepoError::NotFound { .. })));
}
