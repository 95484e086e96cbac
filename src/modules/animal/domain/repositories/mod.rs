mod animal_repository;

pub use animal_repository::AnimalRepository;

#[cfg(test)]
pub use animal_repository::MockAnimalRepository;
