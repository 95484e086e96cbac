pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use domain::{Enclosure, EnclosureRepository, Size};
pub use infrastructure::InMemoryEnclosureRepository;
