pub mod animal;
pub mod enclosure;
pub mod feeding;
pub mod statistics;
