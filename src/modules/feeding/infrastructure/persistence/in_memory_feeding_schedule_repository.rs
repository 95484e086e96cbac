use crate::modules::feeding::domain::entities::FeedingSchedule;
use crate::modules::feeding::domain::repositories::FeedingScheduleRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Process-local schedule store: animal id -> ordered schedule sequence,
/// behind one reader/writer lock.
#[derive(Debug, Default)]
pub struct InMemoryFeedingScheduleRepository {
    schedules: RwLock<HashMap<Uuid, Vec<FeedingSchedule>>>,
}

impl InMemoryFeedingScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedingScheduleRepository for InMemoryFeedingScheduleRepository {
    async fn add_schedule(&self, schedule: &FeedingSchedule) -> AppResult<()> {
        let mut schedules = self.schedules.write();
        schedules
            .entry(schedule.animal_id)
            .or_default()
            .push(schedule.clone());
        debug!(animal_id = %schedule.animal_id, feeding_time = %schedule.feeding_time, "schedule added");
        Ok(())
    }

    async fn schedules_for_animal(&self, animal_id: &Uuid) -> AppResult<Vec<FeedingSchedule>> {
        let schedules = self.schedules.read();
        Ok(schedules.get(animal_id).cloned().unwrap_or_default())
    }

    async fn all_schedules(&self) -> AppResult<HashMap<Uuid, Vec<FeedingSchedule>>> {
        let schedules = self.schedules.read();
        Ok(schedules.clone())
    }

    async fn remove_schedule(
        &self,
        animal_id: &Uuid,
        feeding_time: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut schedules = self.schedules.write();
        if let Some(entries) = schedules.get_mut(animal_id) {
            entries.retain(|s| s.feeding_time != feeding_time);
            debug!(animal_id = %animal_id, feeding_time = %feeding_time, "matching schedules removed");
        }
        Ok(())
    }

    async fn clear_schedules(&self, animal_id: &Uuid) -> AppResult<()> {
        let mut schedules = self.schedules.write();
        schedules.remove(animal_id);
        debug!(animal_id = %animal_id, "schedules cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::value_objects::FoodType;
    use chrono::Duration;

    fn schedule(animal_id: Uuid, in_hours: i64, food_type: FoodType) -> FeedingSchedule {
        FeedingSchedule::new(animal_id, Utc::now() + Duration::hours(in_hours), food_type).unwrap()
    }

    #[tokio::test]
    async fn schedules_accumulate_per_animal() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let animal_id = Uuid::new_v4();

        repo.add_schedule(&schedule(animal_id, 1, FoodType::Meat))
            .await
            .unwrap();
        repo.add_schedule(&schedule(animal_id, 2, FoodType::Fish))
            .await
            .unwrap();

        let entries = repo.schedules_for_animal(&animal_id).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_pairs_are_kept() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let s = schedule(Uuid::new_v4(), 3, FoodType::Fruit);

        repo.add_schedule(&s).await.unwrap();
        repo.add_schedule(&s).await.unwrap();

        assert_eq!(
            repo.schedules_for_animal(&s.animal_id).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn unknown_animal_has_an_empty_sequence() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let entries = repo.schedules_for_animal(&Uuid::new_v4()).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn remove_matches_the_exact_pair_only() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let lion = Uuid::new_v4();
        let seal = Uuid::new_v4();
        let breakfast = schedule(lion, 1, FoodType::Meat);
        let dinner = schedule(lion, 8, FoodType::Meat);
        // same feeding time as the lion's breakfast, different animal
        let seal_meal = FeedingSchedule::new(seal, breakfast.feeding_time, FoodType::Fish).unwrap();
        // duplicate of breakfast; both copies must go
        repo.add_schedule(&breakfast).await.unwrap();
        repo.add_schedule(&breakfast).await.unwrap();
        repo.add_schedule(&dinner).await.unwrap();
        repo.add_schedule(&seal_meal).await.unwrap();

        repo.remove_schedule(&lion, breakfast.feeding_time)
            .await
            .unwrap();

        let lion_left = repo.schedules_for_animal(&lion).await.unwrap();
        assert_eq!(lion_left, vec![dinner]);
        assert_eq!(repo.schedules_for_animal(&seal).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removing_a_nonexistent_pair_is_a_no_op() {
        let repo = InMemoryFeedingScheduleRepository::new();
        repo.remove_schedule(&Uuid::new_v4(), Utc::now()).await.unwrap();
    }

    #[tokio::test]
    async fn clear_drops_the_whole_sequence() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let animal_id = Uuid::new_v4();
        repo.add_schedule(&schedule(animal_id, 1, FoodType::Grass))
            .await
            .unwrap();
        repo.add_schedule(&schedule(animal_id, 2, FoodType::Grass))
            .await
            .unwrap();

        repo.clear_schedules(&animal_id).await.unwrap();

        assert!(repo
            .schedules_for_animal(&animal_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn all_schedules_returns_a_detached_copy() {
        let repo = InMemoryFeedingScheduleRepository::new();
        let animal_id = Uuid::new_v4();
        repo.add_schedule(&schedule(animal_id, 1, FoodType::Meat))
            .await
            .unwrap();

        let mut snapshot = repo.all_schedules().await.unwrap();
        snapshot.get_mut(&animal_id).unwrap().clear();
        snapshot.insert(Uuid::new_v4(), Vec::new());

        assert_eq!(
            repo.schedules_for_animal(&animal_id).await.unwrap().len(),
            1
        );
        assert_eq!(repo.all_schedules().await.unwrap().len(), 1);
    }
}
