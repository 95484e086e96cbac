mod enclosure;

pub use enclosure::Enclosure;
