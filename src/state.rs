//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the activity store behind an async lock. The store keeps activities
//! in insertion order because clients render them in response order.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tokio::sync::RwLock;

// =============================================================================
// ACTIVITY
// =============================================================================

/// An activity's details. The name is the store key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    fn new(description: &str, schedule: &str, max_participants: usize, participants: &[&str]) -> Self {
        Self {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

// =============================================================================
// ACTIVITY STORE
// =============================================================================

/// Ordered name → activity collection. Serializes as a JSON object whose key
/// order matches insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityStore {
    entries: Vec<(String, Activity)>,
}

impl ActivityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. New names are appended.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// The activities offered at startup.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        store.insert(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        store.insert(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        store
    }
}

impl Serialize for ActivityStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<RwLock<ActivityStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ActivityStore) -> Self {
        Self { activities: Arc::new(RwLock::new(store)) }
    }
}
