use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification shared by animals (via their species) and enclosures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Predator,
    Herbivore,
    Omnivore,
    Aquatic,
    Avian,
}

impl AnimalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Predator => "predator",
            AnimalType::Herbivore => "herbivore",
            AnimalType::Omnivore => "omnivore",
            AnimalType::Aquatic => "aquatic",
            AnimalType::Avian => "avian",
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnimalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "predator" => Ok(AnimalType::Predator),
            "herbivore" => Ok(AnimalType::Herbivore),
            "omnivore" => Ok(AnimalType::Omnivore),
            "aquatic" => Ok(AnimalType::Aquatic),
            "avian" => Ok(AnimalType::Avian),
            _ => Err(format!("Invalid animal type: {}", s)),
        }
    }
}
