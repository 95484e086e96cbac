use crate::modules::animal::domain::repositories::AnimalRepository;
use crate::modules::animal::infrastructure::InMemoryAnimalRepository;
use crate::modules::enclosure::domain::repositories::EnclosureRepository;
use crate::modules::enclosure::infrastructure::InMemoryEnclosureRepository;
use crate::modules::feeding::application::FeedingService;
use crate::modules::feeding::infrastructure::InMemoryFeedingScheduleRepository;
use crate::modules::statistics::application::ZooStatisticsService;
use std::sync::Arc;

/// Shared handler state: the three repositories plus the services wired over
/// them. Built once at startup; everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub animal_repo: Arc<dyn AnimalRepository>,
    pub enclosure_repo: Arc<dyn EnclosureRepository>,
    pub feeding: Arc<FeedingService>,
    pub statistics: Arc<ZooStatisticsService>,
}

impl AppState {
    /// Compose the in-memory edition of the zoo: one store per entity, each
    /// owning its own lock, shared by every handler.
    pub fn in_memory() -> Self {
        let animal_repo: Arc<dyn AnimalRepository> = Arc::new(InMemoryAnimalRepository::new());
        let enclosure_repo: Arc<dyn EnclosureRepository> =
            Arc::new(InMemoryEnclosureRepository::new());
        let feeding_repo = Arc::new(InMemoryFeedingScheduleRepository::new());

        let feeding = Arc::new(FeedingService::new(feeding_repo));
        let statistics = Arc::new(ZooStatisticsService::new(
            Arc::clone(&animal_repo),
            Arc::clone(&enclosure_repo),
        ));

        Self {
            animal_repo,
            enclosure_repo,
            feeding,
            statistics,
        }
    }
}
