//! Crew model matching the frontend wire contract.

use serde::{Deserialize, Serialize};

/// A named crew and its assigned rowers, in assignment order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crew {
    pub id: u64,
    pub name: String,
    /// Assigned rower IDs, oldest assignment first, no duplicates.
    pub rower_ids: Vec<u64>,
}

/// Minimal `{id, name}` projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewSummary {
    pub id: u64,
    pub name: String,
}

/// Request body for creating a new crew.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrewRequest {
    pub name: String,
}

/// Request body for the add/remove membership endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub rower_id: u64,
}
