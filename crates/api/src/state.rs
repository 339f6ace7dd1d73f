use std::sync::Arc;

use cinelog_db::repositories::MovieRepository;
use cinelog_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: DbPool,
    /// Movie repository for the pool's backend.
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let movies = pool.movie_repository();
        Self { pool, movies }
    }
}
