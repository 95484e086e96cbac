use crate::modules::feeding::domain::entities::FeedingSchedule;
use crate::modules::feeding::domain::repositories::FeedingScheduleRepository;
use crate::shared::domain::value_objects::FoodType;
use crate::shared::errors::AppResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Orchestrates feeding-schedule bookkeeping. Holds no state of its own;
/// everything lives in the repository.
pub struct FeedingService {
    repo: Arc<dyn FeedingScheduleRepository>,
}

impl FeedingService {
    pub fn new(repo: Arc<dyn FeedingScheduleRepository>) -> Self {
        Self { repo }
    }

    /// Validate and record a new feeding instruction. Construction runs the
    /// entity invariants, so an invalid request never reaches the store.
    pub async fn add_schedule(
        &self,
        animal_id: Uuid,
        feeding_time: DateTime<Utc>,
        food_type: FoodType,
    ) -> AppResult<FeedingSchedule> {
        let schedule = FeedingSchedule::new(animal_id, feeding_time, food_type)?;
        self.repo.add_schedule(&schedule).await?;
        info!(animal_id = %animal_id, feeding_time = %feeding_time, "feeding scheduled");
        Ok(schedule)
    }

    pub async fn remove_schedule(
        &self,
        animal_id: Uuid,
        feeding_time: DateTime<Utc>,
    ) -> AppResult<()> {
        self.repo.remove_schedule(&animal_id, feeding_time).await
    }

    pub async fn schedules_for_animal(&self, animal_id: Uuid) -> AppResult<Vec<FeedingSchedule>> {
        self.repo.schedules_for_animal(&animal_id).await
    }

    pub async fn clear_schedules(&self, animal_id: Uuid) -> AppResult<()> {
        self.repo.clear_schedules(&animal_id).await
    }
}
