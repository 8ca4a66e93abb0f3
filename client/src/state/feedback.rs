//! Outcome rules for signup and removal attempts.
//!
//! Each mutation result maps to a [`Feedback`]: the message to show and the
//! side effects the controller must run. The two flows differ:
//! signup messages always hide after 5 s when the server answered with JSON,
//! while removal errors stay up and only successes hide, after 4 s.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::api::ApiError;
use crate::net::types::{MutationResponse, RemovalTarget};
use crate::state::board::Message;

pub const SIGNUP_MESSAGE_MS: u32 = 5000;
pub const REMOVAL_MESSAGE_MS: u32 = 4000;

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK_ERROR: &str = "Failed to remove participant";
pub const REMOVAL_TRANSPORT_ERROR: &str = "Failed to remove participant. Try again.";

/// What the controller does after a mutation settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: Message,
    /// Re-run the collection fetch before showing the message.
    pub refetch: bool,
    /// Clear the signup form fields.
    pub reset_form: bool,
}

/// Confirmation prompt shown before removing a participant.
pub fn removal_prompt(target: &RemovalTarget) -> String {
    format!("Remove {} from {}?", target.participant, target.activity)
}

/// Map a signup result to feedback.
pub fn signup_feedback(result: &Result<MutationResponse, ApiError>) -> Feedback {
    let transport_error = Feedback {
        message: Message::error(SIGNUP_TRANSPORT_ERROR, None),
        refetch: false,
        reset_form: false,
    };
    let Ok(response) = result else {
        return transport_error;
    };
    let Some(body) = &response.body else {
        return transport_error;
    };

    if response.ok {
        Feedback {
            message: Message::success(body.message.clone().unwrap_or_default(), SIGNUP_MESSAGE_MS),
            refetch: true,
            reset_form: true,
        }
    } else {
        let detail = non_empty(body.detail.as_deref()).unwrap_or(SIGNUP_FALLBACK_ERROR);
        Feedback {
            message: Message::error(detail, Some(SIGNUP_MESSAGE_MS)),
            refetch: false,
            reset_form: false,
        }
    }
}

/// Map a removal result to feedback.
pub fn removal_feedback(target: &RemovalTarget, result: &Result<MutationResponse, ApiError>) -> Feedback {
    let Ok(response) = result else {
        return Feedback {
            message: Message::error(REMOVAL_TRANSPORT_ERROR, None),
            refetch: false,
            reset_form: false,
        };
    };
    let body = response.body.as_ref();

    if response.ok {
        let text = non_empty(body.and_then(|b| b.message.as_deref()))
            .map_or_else(|| format!("{} unregistered from {}", target.participant, target.activity), str::to_owned);
        Feedback { message: Message::success(text, REMOVAL_MESSAGE_MS), refetch: true, reset_form: false }
    } else {
        let detail = non_empty(body.and_then(|b| b.detail.as_deref())).unwrap_or(REMOVAL_FALLBACK_ERROR);
        Feedback { message: Message::error(detail, None), refetch: false, reset_form: false }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
