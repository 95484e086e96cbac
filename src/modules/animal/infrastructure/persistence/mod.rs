mod in_memory_animal_repository;

pub use in_memory_animal_repository::InMemoryAnimalRepository;
