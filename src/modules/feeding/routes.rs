use super::domain::entities::FeedingSchedule;
use crate::shared::domain::value_objects::FoodType;
use crate::shared::errors::AppResult;
use crate::shared::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddScheduleRequest {
    pub animal_id: Uuid,
    pub feeding_time: DateTime<Utc>,
    pub food_type: FoodType,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveScheduleRequest {
    pub animal_id: Uuid,
    pub feeding_time: DateTime<Utc>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedings", axum::routing::post(add_schedule).delete(remove_schedule))
        .route("/feedings/{animal_id}", get(get_animal_schedules).delete(clear_schedules))
}

async fn add_schedule(
    State(state): State<AppState>,
    Json(req): Json<AddScheduleRequest>,
) -> AppResult<(StatusCode, Json<FeedingSchedule>)> {
    let schedule = state
        .feeding
        .add_schedule(req.animal_id, req.feeding_time, req.food_type)
        .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

async fn remove_schedule(
    State(state): State<AppState>,
    Json(req): Json<RemoveScheduleRequest>,
) -> AppResult<StatusCode> {
    state
        .feeding
        .remove_schedule(req.animal_id, req.feeding_time)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_animal_schedules(
    State(state): State<AppState>,
    Path(animal_id): Path<Uuid>,
) -> AppResult<Json<Vec<FeedingSchedule>>> {
    let schedules = state.feeding.schedules_for_animal(animal_id).await?;
    Ok(Json(schedules))
}

async fn clear_schedules(
    State(state): State<AppState>,
    Path(animal_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.feeding.clear_schedules(animal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
