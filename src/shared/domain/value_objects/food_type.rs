use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Meat,
    Grass,
    Fish,
    Fruit,
    Vegetable,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Meat => "meat",
            FoodType::Grass => "grass",
            FoodType::Fish => "fish",
            FoodType::Fruit => "fruit",
            FoodType::Vegetable => "vegetable",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meat" => Ok(FoodType::Meat),
            "grass" => Ok(FoodType::Grass),
            "fish" => Ok(FoodType::Fish),
            "fruit" => Ok(FoodType::Fruit),
            "vegetable" => Ok(FoodType::Vegetable),
            _ => Err(format!("Invalid food type: {}", s)),
        }
    }
}
