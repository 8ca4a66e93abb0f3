//! Activity service: signup and unregister against the shared store.
//!
//! DESIGN
//! ======
//! The rules live in synchronous functions over `&mut ActivityStore` so they
//! can be tested without a runtime. The async wrappers hold the write lock
//! across the whole check-and-modify, which keeps the duplicate and capacity
//! checks atomic with the roster change.
//!
//! ERROR HANDLING
//! ==============
//! `ActivityError`'s display text is the `detail` string returned to clients.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use tracing::info;

use crate::state::{ActivityStore, AppState};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    Full,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Missing email query parameter")]
    MissingEmail,
}

// =============================================================================
// RULES
// =============================================================================

/// Append `email` to the roster of `name`.
///
/// # Errors
///
/// Fails if the activity is unknown, the email is already on the roster, or
/// the roster is at capacity.
pub fn apply_signup(store: &mut ActivityStore, name: &str, email: &str) -> Result<String, ActivityError> {
    let activity = store.get_mut(name).ok_or(ActivityError::NotFound)?;
    if activity.participants.iter().any(|p| p == email) {
        return Err(ActivityError::AlreadySignedUp);
    }
    if activity.is_full() {
        return Err(ActivityError::Full);
    }
    activity.participants.push(email.to_owned());
    Ok(format!("Signed up {email} for {name}"))
}

/// Remove `email` from the roster of `name`.
///
/// # Errors
///
/// Fails if the activity is unknown or the email is not on its roster.
pub fn apply_unregister(store: &mut ActivityStore, name: &str, email: &str) -> Result<String, ActivityError> {
    let activity = store.get_mut(name).ok_or(ActivityError::NotFound)?;
    let index = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(ActivityError::NotSignedUp)?;
    activity.participants.remove(index);
    Ok(format!("Unregistered {email} from {name}"))
}

// =============================================================================
// SHARED STATE
// =============================================================================

/// Snapshot of the full collection.
pub async fn list(state: &AppState) -> ActivityStore {
    state.activities.read().await.clone()
}

/// Sign a participant up.
///
/// # Errors
///
/// See [`apply_signup`].
pub async fn signup(state: &AppState, name: &str, email: &str) -> Result<String, ActivityError> {
    let mut store = state.activities.write().await;
    let message = apply_signup(&mut store, name, email)?;
    info!(activity = %name, %email, "participant signed up");
    Ok(message)
}

/// Unregister a participant.
///
/// # Errors
///
/// See [`apply_unregister`].
pub async fn unregister(state: &AppState, name: &str, email: &str) -> Result<String, ActivityError> {
    let mut store = state.activities.write().await;
    let message = apply_unregister(&mut store, name, email)?;
    info!(activity = %name, %email, "participant unregistered");
    Ok(message)
}
