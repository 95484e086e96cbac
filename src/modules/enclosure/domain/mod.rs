pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Enclosure;
pub use repositories::EnclosureRepository;
pub use value_objects::Size;
