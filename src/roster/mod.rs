//! In-memory roster service.
//!
//! Owns the rower and crew collections and their consistency rules.
//! Every operation validates fully before mutating, so an invalid
//! request never leaves a partial write behind. All state lives for the
//! process lifetime only; [`RosterService::reset_to_seed`] restores the
//! fixed seed dataset.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::AppError;
use crate::models::{Crew, CrewSummary, NewRower, Rower, RowerSummary};

/// Mutable collections and ID counters, guarded as a unit.
///
/// A single lock covers both collections and both counters so an
/// operation's validate+mutate span can never interleave with another
/// operation: concurrent creates cannot receive duplicate IDs, and
/// concurrent add/remove cannot race on a crew's membership list.
#[derive(Debug)]
struct RosterState {
    rowers: Vec<Rower>,
    crews: Vec<Crew>,
    next_rower_id: u64,
    next_crew_id: u64,
}

impl RosterState {
    /// The fixed seed dataset: one rower, one crew containing them,
    /// both counters at 2.
    fn seed() -> Self {
        Self {
            rowers: vec![Rower {
                id: 1,
                name: "John Doe".to_string(),
                height: Some(190.0),
                weight: Some(85.0),
                two_k_time: "6:30".to_string(),
                is_ill: false,
                photo_url: String::new(),
            }],
            crews: vec![Crew {
                id: 1,
                name: "Men's 8+".to_string(),
                rower_ids: vec![1],
            }],
            next_rower_id: 2,
            next_crew_id: 2,
        }
    }
}

/// The roster service. All data operations go through here.
pub struct RosterService {
    state: Mutex<RosterState>,
}

impl RosterService {
    /// Create a service pre-populated with the seed dataset.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RosterState::seed()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RosterState> {
        // A poisoned lock means a panic mid-operation; every mutation
        // validates before writing, so the state is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== ROWER OPERATIONS ====================

    /// List all rowers as `{id, name}` summaries, in creation order.
    pub fn list_rowers(&self) -> Vec<RowerSummary> {
        self.lock()
            .rowers
            .iter()
            .map(|r| RowerSummary {
                id: r.id,
                name: r.name.clone(),
            })
            .collect()
    }

    /// Get the full record of a rower by ID.
    pub fn get_rower(&self, id: u64) -> Result<Rower, AppError> {
        self.lock()
            .rowers
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Rower {} not found", id)))
    }

    /// Create a new rower and return it with its assigned ID.
    ///
    /// The name must be non-empty after trimming; a rejected input does
    /// not consume an ID.
    pub fn create_rower(&self, input: NewRower) -> Result<Rower, AppError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let mut state = self.lock();
        let rower = Rower {
            id: state.next_rower_id,
            name: name.to_string(),
            height: input.height,
            weight: input.weight,
            two_k_time: input.two_k_time,
            is_ill: input.is_ill,
            photo_url: input.photo_url,
        };
        state.next_rower_id += 1;
        state.rowers.push(rower.clone());
        Ok(rower)
    }

    // ==================== CREW OPERATIONS ====================

    /// List all crews as `{id, name}` summaries, in creation order.
    pub fn list_crews(&self) -> Vec<CrewSummary> {
        self.lock()
            .crews
            .iter()
            .map(|c| CrewSummary {
                id: c.id,
                name: c.name.clone(),
            })
            .collect()
    }

    /// Get the full record of a crew by ID.
    pub fn get_crew(&self, id: u64) -> Result<Crew, AppError> {
        self.lock()
            .crews
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Crew {} not found", id)))
    }

    /// Create a new crew with an empty membership list.
    pub fn create_crew(&self, name: &str) -> Result<Crew, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let mut state = self.lock();
        let crew = Crew {
            id: state.next_crew_id,
            name: name.to_string(),
            rower_ids: Vec::new(),
        };
        state.next_crew_id += 1;
        state.crews.push(crew.clone());
        Ok(crew)
    }

    /// Add a rower to a crew and return the updated crew.
    ///
    /// Idempotent: re-adding a current member leaves the list
    /// unchanged. New members are appended, so membership order is
    /// assignment order. A rower may belong to several crews at once;
    /// exclusivity is a client convention, not a service rule.
    pub fn add_rower(&self, crew_id: u64, rower_id: u64) -> Result<Crew, AppError> {
        let mut state = self.lock();
        let RosterState { rowers, crews, .. } = &mut *state;

        let crew = crews
            .iter_mut()
            .find(|c| c.id == crew_id)
            .ok_or_else(|| AppError::NotFound(format!("Crew {} not found", crew_id)))?;

        if !rowers.iter().any(|r| r.id == rower_id) {
            return Err(AppError::NotFound(format!("Rower {} not found", rower_id)));
        }

        if !crew.rower_ids.contains(&rower_id) {
            crew.rower_ids.push(rower_id);
        }
        Ok(crew.clone())
    }

    /// Remove a rower from a crew's membership list and return the
    /// updated crew.
    ///
    /// Removing an absent member is a silent no-op. The rower ID is
    /// deliberately not checked against the rower collection: removal
    /// is purely a membership-list operation.
    pub fn remove_rower(&self, crew_id: u64, rower_id: u64) -> Result<Crew, AppError> {
        let mut state = self.lock();
        let crew = state
            .crews
            .iter_mut()
            .find(|c| c.id == crew_id)
            .ok_or_else(|| AppError::NotFound(format!("Crew {} not found", crew_id)))?;

        crew.rower_ids.retain(|id| *id != rower_id);
        Ok(crew.clone())
    }

    /// Restore the seed dataset and reset both ID counters to 2.
    pub fn reset_to_seed(&self) {
        *self.lock() = RosterState::seed();
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}
