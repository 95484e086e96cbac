use crate::modules::animal::domain::entities::Animal;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage contract for animals. Implementations own the backing collection;
/// every read hands back an owned copy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Insert or overwrite by id. Never fails for a well-formed animal.
    async fn save(&self, animal: &Animal) -> AppResult<()>;
    /// Fails with `NotFound` when no animal has the given id.
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Animal>;
    /// Snapshot of all stored animals, in unspecified order.
    async fn find_all(&self) -> AppResult<Vec<Animal>>;
    /// Removes the entry if present; deleting an absent id is a no-op.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn count(&self) -> AppResult<usize>;
}
