use crate::modules::enclosure::domain::value_objects::Size;
use crate::shared::domain::value_objects::AnimalType;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enclosure and the ordered list of animal ids housed in it.
///
/// `current_count` is a separately maintained occupancy figure: the
/// membership mutators below touch only `animal_ids`, and the two can drift
/// apart. Space queries go by `current_count` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enclosure {
    pub id: Uuid,
    pub animal_type: AnimalType,
    pub size: Size,
    pub current_count: u32,
    pub max_capacity: u32,
    pub animal_ids: Vec<Uuid>,
}

impl Enclosure {
    /// Build a new, empty enclosure with a generated id.
    ///
    /// Fails with [`AppError::Validation`] when `max_capacity` is zero.
    pub fn new(animal_type: AnimalType, size: Size, max_capacity: u32) -> AppResult<Self> {
        if max_capacity == 0 {
            return Err(AppError::validation("max capacity must be greater than zero"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            animal_type,
            size,
            current_count: 0,
            max_capacity,
            animal_ids: Vec::new(),
        })
    }

    /// Append an animal id to the membership list. Does not change
    /// `current_count`.
    pub fn add_animal(&mut self, animal_id: Uuid) {
        self.animal_ids.push(animal_id);
    }

    /// Drop every occurrence of the id from the membership list. Returns
    /// whether anything was removed. Does not change `current_count`.
    pub fn remove_animal(&mut self, animal_id: &Uuid) -> bool {
        let before = self.animal_ids.len();
        self.animal_ids.retain(|id| id != animal_id);
        self.animal_ids.len() < before
    }

    pub fn contains_animal(&self, animal_id: &Uuid) -> bool {
        self.animal_ids.contains(animal_id)
    }

    /// Capacity headroom according to `current_count`.
    pub fn available_space(&self) -> u32 {
        self.max_capacity.saturating_sub(self.current_count)
    }
}
