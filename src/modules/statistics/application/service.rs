use crate::modules::animal::domain::entities::Animal;
use crate::modules::animal::domain::repositories::AnimalRepository;
use crate::modules::enclosure::domain::entities::Enclosure;
use crate::modules::enclosure::domain::repositories::EnclosureRepository;
use crate::shared::domain::value_objects::AnimalType;
use crate::shared::errors::AppResult;
use std::sync::Arc;
use uuid::Uuid;

/// Read-only zoo-wide queries. Stateless; every answer comes straight from
/// the repositories.
pub struct ZooStatisticsService {
    animal_repo: Arc<dyn AnimalRepository>,
    enclosure_repo: Arc<dyn EnclosureRepository>,
}

impl ZooStatisticsService {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        enclosure_repo: Arc<dyn EnclosureRepository>,
    ) -> Self {
        Self {
            animal_repo,
            enclosure_repo,
        }
    }

    pub async fn all_animals(&self) -> AppResult<Vec<Animal>> {
        self.animal_repo.find_all().await
    }

    pub async fn all_enclosures(&self) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo.find_all().await
    }

    pub async fn animal_count(&self) -> AppResult<usize> {
        self.animal_repo.count().await
    }

    /// Animals whose species name matches exactly (case-sensitive).
    pub async fn animals_by_species(&self, species_name: &str) -> AppResult<Vec<Animal>> {
        let animals = self.animal_repo.find_all().await?;
        Ok(animals
            .into_iter()
            .filter(|a| a.species.name == species_name)
            .collect())
    }

    pub async fn enclosures_by_type(&self, animal_type: AnimalType) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo.find_by_type(animal_type).await
    }

    /// Enclosures with at least `min_space` free slots; `None` defaults to 1.
    pub async fn enclosures_with_space(&self, min_space: Option<u32>) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo
            .find_with_available_space(min_space.unwrap_or(1))
            .await
    }

    /// Resolve an enclosure's membership list to animals. Ids that no longer
    /// resolve (the stores are not cross-cleaned on delete) are skipped.
    pub async fn animals_in_enclosure(&self, enclosure_id: &Uuid) -> AppResult<Vec<Animal>> {
        let enclosure = self.enclosure_repo.find_by_id(enclosure_id).await?;

        let mut animals = Vec::with_capacity(enclosure.animal_ids.len());
        for animal_id in &enclosure.animal_ids {
            if let Ok(animal) = self.animal_repo.find_by_id(animal_id).await {
                animals.push(animal);
            }
        }
        Ok(animals)
    }
}
