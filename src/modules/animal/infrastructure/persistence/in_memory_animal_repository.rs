use crate::modules::animal::domain::entities::Animal;
use crate::modules::animal::domain::repositories::AnimalRepository;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Process-local animal store. One reader/writer lock guards the whole map;
/// no operation takes the lock more than once or holds it across an await.
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: RwLock<HashMap<Uuid, Animal>>,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn save(&self, animal: &Animal) -> AppResult<()> {
        let mut animals = self.animals.write();
        animals.insert(animal.id, animal.clone());
        debug!(animal_id = %animal.id, "animal saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Animal> {
        let animals = self.animals.read();
        animals
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("animal {}", id)))
    }

    async fn find_all(&self) -> AppResult<Vec<Animal>> {
        let animals = self.animals.read();
        Ok(animals.values().cloned().collect())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut animals = self.animals.write();
        if animals.remove(id).is_some() {
            debug!(animal_id = %id, "animal deleted");
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<usize> {
        let animals = self.animals.read();
        Ok(animals.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::animal::domain::entities::{Gender, HealthStatus};
    use crate::modules::animal::domain::value_objects::{Food, Species};
    use crate::shared::domain::value_objects::{AnimalType, FoodType};
    use chrono::{Duration, Utc};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn animal(name: &str) -> Animal {
        Animal::new(
            name,
            Species::new(AnimalType::Herbivore, "zebra"),
            Utc::now() - Duration::days(200),
            Uuid::new_v4(),
            HealthStatus::Healthy,
            Gender::Female,
            Food::new(FoodType::Grass, "hay"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find_returns_the_saved_animal() {
        let repo = InMemoryAnimalRepository::new();
        let marty = animal("Marty");

        repo.save(&marty).await.unwrap();

        let found = repo.find_by_id(&marty.id).await.unwrap();
        assert_eq!(found, marty);
        // repeated reads see the same value
        assert_eq!(repo.find_by_id(&marty.id).await.unwrap(), marty);
    }

    #[tokio::test]
    async fn save_overwrites_by_id() {
        let repo = InMemoryAnimalRepository::new();
        let mut marty = animal("Marty");
        repo.save(&marty).await.unwrap();

        marty.heal();
        marty.name = "Marty II".to_string();
        repo.save(&marty).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_by_id(&marty.id).await.unwrap().name, "Marty II");
    }

    #[tokio::test]
    async fn find_by_id_misses_with_not_found() {
        let repo = InMemoryAnimalRepository::new();
        let err = repo.find_by_id(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_find_yields_not_found() {
        let repo = InMemoryAnimalRepository::new();
        let gloria = animal("Gloria");
        repo.save(&gloria).await.unwrap();

        repo.delete(&gloria.id).await.unwrap();

        let err = repo.find_by_id(&gloria.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleting_an_absent_id_is_a_no_op() {
        let repo = InMemoryAnimalRepository::new();
        repo.delete(&Uuid::new_v4()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_all_returns_each_saved_animal_exactly_once() {
        let repo = InMemoryAnimalRepository::new();
        let saved: Vec<Animal> = (0..7).map(|i| animal(&format!("animal-{}", i))).collect();
        for a in &saved {
            repo.save(a).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), saved.len());

        let ids: HashSet<Uuid> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), saved.len());
        for a in &saved {
            assert!(ids.contains(&a.id));
        }
    }

    #[tokio::test]
    async fn mutating_a_returned_copy_does_not_touch_the_store() {
        let repo = InMemoryAnimalRepository::new();
        let alex = animal("Alex");
        repo.save(&alex).await.unwrap();

        let mut copy = repo.find_by_id(&alex.id).await.unwrap();
        copy.name = "Impostor".to_string();

        assert_eq!(repo.find_by_id(&alex.id).await.unwrap().name, "Alex");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_with_distinct_ids_are_all_visible() {
        let repo = Arc::new(InMemoryAnimalRepository::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let a = animal(&format!("writer-{}", i));
                let id = a.id;
                repo.save(&a).await.unwrap();
                id
            }));
        }

        let expected: HashSet<Uuid> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|res| res.unwrap())
            .collect();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 32);
        let seen: HashSet<Uuid> = all.iter().map(|a| a.id).collect();
        assert_eq!(seen, expected);
    }
}
