//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads. The activity collection is
//! a JSON object keyed by activity name whose key order is the render order,
//! so it is decoded into an ordered `Vec` rather than a hash map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description.
    pub description: String,
    /// Human-readable schedule, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Roster capacity.
    pub max_participants: i64,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports an over-full roster.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participant_count()
    }

    /// Roster size as a signed count.
    pub fn participant_count(&self) -> i64 {
        i64::try_from(self.participants.len()).unwrap_or(i64::MAX)
    }
}

/// An activity paired with the name it is keyed by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub name: String,
    pub activity: Activity,
}

/// The full collection from `GET /activities`, in response order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection(pub Vec<ActivityEntry>);

impl ActivityCollection {
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<ActivityEntry> {
        self.0
    }

    /// Activity names in response order.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|entry| entry.name.clone()).collect()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push(ActivityEntry { name, activity });
                }
                Ok(ActivityCollection(entries))
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Body of a signup/unregister response. Success carries `message`, failure
/// carries `detail`; either may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Raw outcome of a mutation request that reached the server.
///
/// `body` is `None` when the response body was not valid JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationResponse {
    pub ok: bool,
    pub body: Option<ActionBody>,
}

/// Context captured for one rendered roster row and handed to the removal
/// handler when its control is activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub participant: String,
}
