mod enclosure_repository;

pub use enclosure_repository::EnclosureRepository;

#[cfg(test)]
pub use enclosure_repository::MockEnclosureRepository;
