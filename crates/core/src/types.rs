/// Movie primary keys are UUIDs assigned by the repository on insert.
///
/// The nil UUID marks a record that has not been persisted yet.
pub type MovieId = uuid::Uuid;

/// Returns `true` if `id` has been assigned by a repository.
pub fn is_assigned(id: &MovieId) -> bool {
    !id.is_nil()
}
