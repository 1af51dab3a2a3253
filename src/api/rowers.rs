//! Rower API endpoints.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::errors::AppError;
use crate::models::{NewRower, Rower, RowerSummary};
use crate::AppState;

/// GET /rowers - List all rowers as `{id, name}` summaries.
pub async fn list_rowers(State(state): State<AppState>) -> Json<Vec<RowerSummary>> {
    Json(state.roster.list_rowers())
}

/// GET /rowers/:id - Get a single rower's full record.
pub async fn get_rower(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Rower>, AppError> {
    Ok(Json(state.roster.get_rower(id)?))
}

/// POST /rowers - Create a new rower from a multipart form.
///
/// Accepted fields: `name` (required), `height`, `weight`, `twoKTime`,
/// `isIll`, `photo`. The photo is stored before the rower is created,
/// so a rejected upload never consumes a rower ID.
pub async fn create_rower(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut input = NewRower::default();
    let mut photo: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "name" => input.name = field.text().await?,
            "height" => input.height = parse_optional_number(&field.text().await?, "height")?,
            "weight" => input.weight = parse_optional_number(&field.text().await?, "weight")?,
            "twoKTime" => input.two_k_time = field.text().await?,
            "isIll" => input.is_ill = parse_flag(&field.text().await?, "isIll")?,
            "photo" => {
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers submit an empty part when no file is chosen.
                if !bytes.is_empty() {
                    photo = Some((bytes.to_vec(), media_type));
                }
            }
            _ => {}
        }
    }

    if let Some((bytes, media_type)) = photo {
        input.photo_url = state.photos.store(&bytes, &media_type).await?;
    }

    let rower = state.roster.create_rower(input)?;
    Ok((StatusCode::CREATED, Json(rower)))
}

/// Parse an optional numeric form field.
///
/// An empty field means absent; anything else must be a finite
/// non-negative number. Malformed values are rejected rather than
/// silently coerced to null.
fn parse_optional_number(raw: &str, field: &str) -> Result<Option<f64>, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(AppError::Validation(format!(
            "Invalid {}: {:?}",
            field, raw
        ))),
    }
}

/// Parse a boolean form field. An empty field means false.
fn parse_flag(raw: &str, field: &str) -> Result<bool, AppError> {
    match raw.trim() {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        other => Err(AppError::Validation(format!(
            "Invalid {}: {:?}",
            field, other
        ))),
    }
}
