use crate::modules::animal::domain::entities::Animal;
use crate::shared::errors::AppResult;
use crate::shared::state::AppState;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalCountResponse {
    pub animal_count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics/animals/count", get(get_animal_count))
        .route(
            "/statistics/animals/by-species/{name}",
            get(get_animals_by_species),
        )
}

async fn get_animal_count(State(state): State<AppState>) -> AppResult<Json<AnimalCountResponse>> {
    let animal_count = state.statistics.animal_count().await?;
    Ok(Json(AnimalCountResponse { animal_count }))
}

async fn get_animals_by_species(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Animal>>> {
    let animals = state.statistics.animals_by_species(&name).await?;
    Ok(Json(animals))
}
