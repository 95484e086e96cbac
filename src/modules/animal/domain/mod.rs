pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Animal, Gender, HealthStatus};
pub use repositories::AnimalRepository;
pub use value_objects::{Food, Species};
