use crate::shared::domain::value_objects::FoodType;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One feeding instruction. Schedules carry no id of their own; a schedule
/// is addressed by its `(animal_id, feeding_time)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSchedule {
    pub animal_id: Uuid,
    pub feeding_time: DateTime<Utc>,
    pub food_type: FoodType,
}

impl FeedingSchedule {
    /// Fails with [`AppError::Validation`] when the animal id is nil or the
    /// feeding time already lies in the past.
    pub fn new(
        animal_id: Uuid,
        feeding_time: DateTime<Utc>,
        food_type: FoodType,
    ) -> AppResult<Self> {
        if animal_id.is_nil() {
            return Err(AppError::validation("animal id cannot be nil"));
        }
        if feeding_time < Utc::now() {
            return Err(AppError::validation("feeding time cannot be in the past"));
        }

        Ok(Self {
            animal_id,
            feeding_time,
            food_type,
        })
    }
}
