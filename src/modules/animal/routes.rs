use super::domain::entities::{Animal, Gender, HealthStatus};
use super::domain::value_objects::{Food, Species};
use crate::shared::errors::AppResult;
use crate::shared::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimalRequest {
    pub name: String,
    pub species: Species,
    pub birth_date: DateTime<Utc>,
    pub enclosure_id: Uuid,
    pub health_status: HealthStatus,
    pub gender: Gender,
    pub favorite_food: Food,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/animals", get(get_all).post(create))
        .route("/animals/{id}", get(get_by_id).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAnimalRequest>,
) -> AppResult<(StatusCode, Json<Animal>)> {
    let animal = Animal::new(
        req.name,
        req.species,
        req.birth_date,
        req.enclosure_id,
        req.health_status,
        req.gender,
        req.favorite_food,
    )?;

    state.animal_repo.save(&animal).await?;
    info!(animal_id = %animal.id, name = %animal.name, "animal registered");

    Ok((StatusCode::CREATED, Json(animal)))
}

async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Animal>>> {
    let animals = state.animal_repo.find_all().await?;
    Ok(Json(animals))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Animal>> {
    let animal = state.animal_repo.find_by_id(&id).await?;
    Ok(Json(animal))
}

async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    state.animal_repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
