pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use domain::{Animal, AnimalRepository, Food, Gender, HealthStatus, Species};
pub use infrastructure::InMemoryAnimalRepository;
