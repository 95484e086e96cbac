use crate::modules::enclosure::domain::entities::Enclosure;
use crate::modules::enclosure::domain::repositories::EnclosureRepository;
use crate::shared::domain::value_objects::AnimalType;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Process-local enclosure store behind one reader/writer lock.
///
/// The type and available-space queries are linear scans on purpose: the
/// collection is a handful of enclosures, never large enough to index.
#[derive(Debug, Default)]
pub struct InMemoryEnclosureRepository {
    enclosures: RwLock<HashMap<Uuid, Enclosure>>,
}

impl InMemoryEnclosureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EnclosureRepository for InMemoryEnclosureRepository {
    async fn save(&self, enclosure: &Enclosure) -> AppResult<()> {
        let mut enclosures = self.enclosures.write();
        enclosures.insert(enclosure.id, enclosure.clone());
        debug!(enclosure_id = %enclosure.id, "enclosure saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Enclosure> {
        let enclosures = self.enclosures.read();
        enclosures
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("enclosure {}", id)))
    }

    async fn find_all(&self) -> AppResult<Vec<Enclosure>> {
        let enclosures = self.enclosures.read();
        Ok(enclosures.values().cloned().collect())
    }

    async fn find_by_type(&self, animal_type: AnimalType) -> AppResult<Vec<Enclosure>> {
        let enclosures = self.enclosures.read();
        Ok(enclosures
            .values()
            .filter(|e| e.animal_type == animal_type)
            .cloned()
            .collect())
    }

    async fn find_with_available_space(&self, min_space: u32) -> AppResult<Vec<Enclosure>> {
        let enclosures = self.enclosures.read();
        Ok(enclosures
            .values()
            .filter(|e| e.available_space() >= min_space)
            .cloned()
            .collect())
    }

    async fn update(&self, enclosure: &Enclosure) -> AppResult<()> {
        let mut enclosures = self.enclosures.write();
        if !enclosures.contains_key(&enclosure.id) {
            return Err(AppError::not_found(format!("enclosure {}", enclosure.id)));
        }
        enclosures.insert(enclosure.id, enclosure.clone());
        debug!(enclosure_id = %enclosure.id, "enclosure updated");
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut enclosures = self.enclosures.write();
        if enclosures.remove(id).is_some() {
            debug!(enclosure_id = %id, "enclosure deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::enclosure::domain::value_objects::Size;

    fn enclosure(animal_type: AnimalType, max_capacity: u32, current_count: u32) -> Enclosure {
        let mut e = Enclosure::new(animal_type, Size::new(10, 10, 4), max_capacity).unwrap();
        e.current_count = current_count;
        e
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryEnclosureRepository::new();
        let aviary = enclosure(AnimalType::Avian, 8, 0);

        repo.save(&aviary).await.unwrap();

        assert_eq!(repo.find_by_id(&aviary.id).await.unwrap(), aviary);
    }

    #[tokio::test]
    async fn update_requires_an_existing_id() {
        let repo = InMemoryEnclosureRepository::new();
        let pen = enclosure(AnimalType::Herbivore, 10, 0);

        let err = repo.update(&pen).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        repo.save(&pen).await.unwrap();
        let mut changed = pen.clone();
        changed.current_count = 4;
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.find_by_id(&pen.id).await.unwrap().current_count, 4);
    }

    #[tokio::test]
    async fn find_by_type_matches_only_the_requested_tag() {
        let repo = InMemoryEnclosureRepository::new();
        let cage = enclosure(AnimalType::Predator, 4, 0);
        let tank = enclosure(AnimalType::Aquatic, 12, 0);
        repo.save(&cage).await.unwrap();
        repo.save(&tank).await.unwrap();

        let predators = repo.find_by_type(AnimalType::Predator).await.unwrap();
        assert_eq!(predators.len(), 1);
        assert_eq!(predators[0].id, cage.id);

        let avians = repo.find_by_type(AnimalType::Avian).await.unwrap();
        assert!(avians.is_empty());
    }

    #[tokio::test]
    async fn available_space_boundary_is_inclusive() {
        let repo = InMemoryEnclosureRepository::new();
        // capacity 5, occupancy 3 -> exactly 2 free
        let pen = enclosure(AnimalType::Herbivore, 5, 3);
        repo.save(&pen).await.unwrap();

        let with_two = repo.find_with_available_space(2).await.unwrap();
        assert_eq!(with_two.len(), 1, "k == free space must be included");

        let with_three = repo.find_with_available_space(3).await.unwrap();
        assert!(with_three.is_empty());

        // min_space of zero matches everything, including a full enclosure
        let full = enclosure(AnimalType::Predator, 4, 4);
        repo.save(&full).await.unwrap();
        assert_eq!(repo.find_with_available_space(0).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn space_queries_go_by_current_count_not_the_membership_list() {
        let repo = InMemoryEnclosureRepository::new();
        let mut pen = enclosure(AnimalType::Herbivore, 5, 0);
        // three residents in the list, but the occupancy figure stays 0
        for _ in 0..3 {
            pen.add_animal(Uuid::new_v4());
        }
        repo.save(&pen).await.unwrap();

        // per current_count all 5 slots look free
        assert_eq!(repo.find_with_available_space(5).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryEnclosureRepository::new();
        let pen = enclosure(AnimalType::Omnivore, 6, 0);
        repo.save(&pen).await.unwrap();

        repo.delete(&pen.id).await.unwrap();
        repo.delete(&pen.id).await.unwrap();

        let err = repo.find_by_id(&pen.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
