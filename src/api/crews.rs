//! Crew API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::errors::AppError;
use crate::models::{CreateCrewRequest, Crew, CrewSummary, MembershipRequest};
use crate::AppState;

/// GET /crews - List all crews as `{id, name}` summaries.
pub async fn list_crews(State(state): State<AppState>) -> Json<Vec<CrewSummary>> {
    Json(state.roster.list_crews())
}

/// GET /crews/:id - Get a single crew's full record.
pub async fn get_crew(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Crew>, AppError> {
    Ok(Json(state.roster.get_crew(id)?))
}

/// POST /crews - Create a new crew.
pub async fn create_crew(
    State(state): State<AppState>,
    Json(request): Json<CreateCrewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let crew = state.roster.create_crew(&request.name)?;
    Ok((StatusCode::CREATED, Json(crew)))
}

/// POST /crews/:id/addRower - Add a rower to a crew.
pub async fn add_rower(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<Crew>, AppError> {
    Ok(Json(state.roster.add_rower(id, request.rower_id)?))
}

/// POST /crews/:id/removeRower - Remove a rower from a crew.
pub async fn remove_rower(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<Crew>, AppError> {
    Ok(Json(state.roster.remove_rower(id, request.rower_id)?))
}
