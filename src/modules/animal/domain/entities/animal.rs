use crate::modules::animal::domain::value_objects::{Food, Species};
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Sick,
}

/// A resident animal. The enclosure reference is a plain id; membership on
/// the enclosure side is tracked independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: Uuid,
    pub name: String,
    pub species: Species,
    pub birth_date: DateTime<Utc>,
    pub enclosure_id: Uuid,
    pub health_status: HealthStatus,
    pub gender: Gender,
    pub favorite_food: Food,
}

impl Animal {
    /// Build a new animal with a generated id.
    ///
    /// Fails with [`AppError::Validation`] when the name is empty or the
    /// birth date lies in the future.
    pub fn new(
        name: impl Into<String>,
        species: Species,
        birth_date: DateTime<Utc>,
        enclosure_id: Uuid,
        health_status: HealthStatus,
        gender: Gender,
        favorite_food: Food,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AppError::validation("animal name cannot be empty"));
        }
        if birth_date > Utc::now() {
            return Err(AppError::validation("birth date cannot be in the future"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            species,
            birth_date,
            enclosure_id,
            health_status,
            gender,
            favorite_food,
        })
    }

    pub fn heal(&mut self) {
        self.health_status = HealthStatus::Healthy;
    }

    /// Point this animal at another enclosure. Enclosure membership lists
    /// are maintained separately by the caller.
    pub fn transfer_to(&mut self, enclosure_id: Uuid) {
        self.enclosure_id = enclosure_id;
    }

    pub fn is_healthy(&self) -> bool {
        self.health_status == HealthStatus::Healthy
    }
}
