//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod crews;
mod rowers;

pub use crews::*;
pub use rowers::*;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// POST /test/reset - Restore the seed dataset (test support only).
///
/// Only mounted when test routes are enabled in the configuration.
pub async fn reset(State(state): State<AppState>) -> Json<Value> {
    state.roster.reset_to_seed();
    Json(json!({ "message": "Test data reset" }))
}
