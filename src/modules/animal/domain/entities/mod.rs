mod animal;

pub use animal::{Animal, Gender, HealthStatus};
