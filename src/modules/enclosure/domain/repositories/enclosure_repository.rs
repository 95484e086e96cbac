use crate::modules::enclosure::domain::entities::Enclosure;
use crate::shared::domain::value_objects::AnimalType;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage contract for enclosures. Extends the plain CRUD shape with the
/// two scan queries the zoo actually needs; with at most a few dozen
/// enclosures a secondary index would buy nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnclosureRepository: Send + Sync {
    /// Insert or overwrite by id. Never fails for a well-formed enclosure.
    async fn save(&self, enclosure: &Enclosure) -> AppResult<()>;
    /// Fails with `NotFound` when no enclosure has the given id.
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Enclosure>;
    /// Snapshot of all stored enclosures, in unspecified order.
    async fn find_all(&self) -> AppResult<Vec<Enclosure>>;
    /// All enclosures with a matching type tag; empty when none match.
    async fn find_by_type(&self, animal_type: AnimalType) -> AppResult<Vec<Enclosure>>;
    /// All enclosures where `max_capacity - current_count >= min_space`.
    /// Callers default `min_space` themselves; the contract does not.
    async fn find_with_available_space(&self, min_space: u32) -> AppResult<Vec<Enclosure>>;
    /// Overwrite an existing enclosure; fails with `NotFound` when the id
    /// has never been saved (unlike `save`, which always succeeds).
    async fn update(&self, enclosure: &Enclosure) -> AppResult<()>;
    /// Removes the entry if present; deleting an absent id is a no-op.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
