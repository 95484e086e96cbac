use super::domain::entities::Enclosure;
use super::domain::value_objects::Size;
use crate::modules::animal::domain::entities::Animal;
use crate::shared::domain::value_objects::AnimalType;
use crate::shared::errors::AppResult;
use crate::shared::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnclosureRequest {
    pub animal_type: AnimalType,
    pub size: Size,
    pub max_capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSpaceQuery {
    pub min_space: Option<u32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enclosures", get(get_all).post(create))
        .route("/enclosures/available", get(get_with_available_space))
        .route("/enclosures/by-type/{animal_type}", get(get_by_type))
        .route("/enclosures/{id}", get(get_by_id))
        .route("/enclosures/{id}/animals", get(get_animals))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateEnclosureRequest>,
) -> AppResult<(StatusCode, Json<Enclosure>)> {
    let enclosure = Enclosure::new(req.animal_type, req.size, req.max_capacity)?;

    state.enclosure_repo.save(&enclosure).await?;
    info!(enclosure_id = %enclosure.id, animal_type = %enclosure.animal_type, "enclosure registered");

    Ok((StatusCode::CREATED, Json(enclosure)))
}

async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Enclosure>>> {
    let enclosures = state.statistics.all_enclosures().await?;
    Ok(Json(enclosures))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Enclosure>> {
    let enclosure = state.enclosure_repo.find_by_id(&id).await?;
    Ok(Json(enclosure))
}

async fn get_by_type(
    State(state): State<AppState>,
    Path(animal_type): Path<AnimalType>,
) -> AppResult<Json<Vec<Enclosure>>> {
    let enclosures = state.statistics.enclosures_by_type(animal_type).await?;
    Ok(Json(enclosures))
}

async fn get_with_available_space(
    State(state): State<AppState>,
    Query(query): Query<AvailableSpaceQuery>,
) -> AppResult<Json<Vec<Enclosure>>> {
    let enclosures = state.statistics.enclosures_with_space(query.min_space).await?;
    Ok(Json(enclosures))
}

async fn get_animals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Animal>>> {
    let animals = state.statistics.animals_in_enclosure(&id).await?;
    Ok(Json(animals))
}
