use crate::modules::feeding::domain::entities::FeedingSchedule;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Storage contract for feeding schedules, keyed by animal id rather than a
/// schedule id of their own. The dominant access pattern is "everything for
/// one animal", so that is what the key optimizes for.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingScheduleRepository: Send + Sync {
    /// Append to the animal's sequence. Duplicates are not collapsed; two
    /// identical `(animal, time)` pairs may coexist.
    async fn add_schedule(&self, schedule: &FeedingSchedule) -> AppResult<()>;
    /// The animal's schedule sequence; empty when it has none.
    async fn schedules_for_animal(&self, animal_id: &Uuid) -> AppResult<Vec<FeedingSchedule>>;
    /// Deep copy of the whole mapping; mutating it cannot reach the store.
    async fn all_schedules(&self) -> AppResult<HashMap<Uuid, Vec<FeedingSchedule>>>;
    /// Remove every schedule matching the pair exactly. Absent matches are a
    /// silent no-op.
    async fn remove_schedule(
        &self,
        animal_id: &Uuid,
        feeding_time: DateTime<Utc>,
    ) -> AppResult<()>;
    /// Drop the animal's entire sequence.
    async fn clear_schedules(&self, animal_id: &Uuid) -> AppResult<()>;
}
