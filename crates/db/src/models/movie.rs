//! Movie entity model and DTOs.

use cinelog_core::types::{is_assigned, MovieId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
///
/// Callers build unsaved movies with [`Movie::new`]; the id is nil until a
/// repository `add` assigns one.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub director: Option<String>,
}

impl Movie {
    pub fn new(name: impl Into<String>, director: Option<String>) -> Self {
        Self {
            id: MovieId::nil(),
            name: name.into(),
            director,
        }
    }

    /// Whether a repository has assigned this movie an id.
    pub fn is_persisted(&self) -> bool {
        is_assigned(&self.id)
    }
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub name: String,
    pub director: Option<String>,
}

impl From<CreateMovie> for Movie {
    fn from(input: CreateMovie) -> Self {
        Movie::new(input.name, input.director)
    }
}

/// DTO for replacing a movie's descriptive fields.
///
/// Both fields are overwritten; an omitted `director` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub name: String,
    pub director: Option<String>,
}

impl UpdateMovie {
    /// Overwrite `movie`'s descriptive fields, keeping its id.
    pub fn apply_to(self, movie: &mut Movie) {
        movie.name = self.name;
        movie.director = self.director;
    }
}
