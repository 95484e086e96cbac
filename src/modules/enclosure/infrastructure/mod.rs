pub mod persistence;

pub use persistence::InMemoryEnclosureRepository;
