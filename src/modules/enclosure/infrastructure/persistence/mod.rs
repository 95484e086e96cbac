mod in_memory_enclosure_repository;

pub use in_memory_enclosure_repository::InMemoryEnclosureRepository;
