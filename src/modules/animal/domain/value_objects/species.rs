use crate::shared::domain::value_objects::AnimalType;
use serde::{Deserialize, Serialize};

/// Species a resident animal belongs to. No identity of its own; embedded in
/// [`Animal`](crate::modules::animal::Animal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub animal_type: AnimalType,
    pub name: String,
}

impl Species {
    pub fn new(animal_type: AnimalType, name: impl Into<String>) -> Self {
        Self {
            animal_type,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.animal_type)
    }
}
