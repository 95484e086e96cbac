use crate::shared::domain::value_objects::FoodType;
use serde::{Deserialize, Serialize};

/// A concrete food item (type plus name), e.g. `meat / "beef"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub food_type: FoodType,
    pub name: String,
}

impl Food {
    pub fn new(food_type: FoodType, name: impl Into<String>) -> Self {
        Self {
            food_type,
            name: name.into(),
        }
    }
}
