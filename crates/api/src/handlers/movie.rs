//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::MovieId;
use cinelog_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let mut movie = Movie::from(input);
    state.movies.add(&mut movie).await?;
    tracing::info!(movie_id = %movie.id, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.list().await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movie = find_or_404(&state, id).await?;
    Ok(Json(movie))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let mut movie = find_or_404(&state, id).await?;
    input.apply_to(&mut movie);
    state.movies.edit(&movie).await?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<StatusCode> {
    let movie = find_or_404(&state, id).await?;
    state.movies.delete(&movie).await?;
    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_or_404(state: &AppState, id: MovieId) -> AppResult<Movie> {
    state
        .movies
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
}
