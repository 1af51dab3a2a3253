//! Rower model matching the frontend wire contract.

use serde::{Deserialize, Serialize};

/// A rower tracked by the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rower {
    pub id: u64,
    pub name: String,
    /// Height in centimetres, null when not recorded.
    pub height: Option<f64>,
    /// Weight in kilograms, null when not recorded.
    pub weight: Option<f64>,
    /// 2K erg time as free-form text, e.g. "6:30". Empty when unknown.
    pub two_k_time: String,
    pub is_ill: bool,
    /// URL of the stored photo; empty string when none was uploaded.
    pub photo_url: String,
}

/// Minimal `{id, name}` projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowerSummary {
    pub id: u64,
    pub name: String,
}

/// Validated input for creating a rower.
///
/// Assembled by the HTTP layer from the multipart form. The photo, if
/// any, has already been handed to the photo store by the time this
/// struct exists; only the resulting URL travels further.
#[derive(Debug, Clone, Default)]
pub struct NewRower {
    pub name: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub two_k_time: String,
    pub is_ill: bool,
    pub photo_url: String,
}
