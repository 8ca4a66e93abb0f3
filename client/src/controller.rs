//! The activity-board controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once by the root component and provided through context. It
//! owns the reactive state the page renders from and runs the three flows:
//! loading the collection, submitting a signup, and removing a participant.
//!
//! DESIGN
//! ======
//! Every flow is one request followed by a state update. Mutations that
//! succeed trigger a full refetch; nothing is applied optimistically. Flows
//! are not serialized against each other, so the list shows whichever fetch
//! resolved last.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::RemovalTarget;
use crate::state::board::{BoardState, Message};
use crate::state::feedback::{Feedback, removal_feedback, removal_prompt, signup_feedback};
use crate::state::signup::SignupFormState;
use crate::util::dialog;

/// Handle to the page state. `Copy`, so it can move into event handlers freely.
#[derive(Clone, Copy)]
pub struct BoardController {
    board: RwSignal<BoardState>,
    form: RwSignal<SignupFormState>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardController {
    pub fn new() -> Self {
        Self { board: RwSignal::new(BoardState::default()), form: RwSignal::new(SignupFormState::default()) }
    }

    pub fn board(&self) -> RwSignal<BoardState> {
        self.board
    }

    pub fn form(&self) -> RwSignal<SignupFormState> {
        self.form
    }

    /// Fetch the collection and replace the rendered list.
    pub async fn fetch_activities(self) {
        let result = api::fetch_activities().await;
        log_failure("Error fetching activities", &result);
        self.board.update(|state| state.apply_fetch(result));
    }

    /// Submit the signup form's current values.
    pub async fn submit_signup(self) {
        let SignupFormState { email, activity } = self.form.get_untracked();
        let result = api::signup(&activity, &email).await;
        log_failure("Error signing up", &result);
        self.settle(signup_feedback(&result)).await;
    }

    /// Ask for confirmation, then remove `target.participant` from `target.activity`.
    pub async fn remove_participant(self, target: RemovalTarget) {
        if !dialog::confirm(&removal_prompt(&target)) {
            return;
        }
        let result = api::unregister(&target).await;
        log_failure("Error unregistering participant", &result);
        self.settle(removal_feedback(&target, &result)).await;
    }

    async fn settle(self, feedback: Feedback) {
        if feedback.reset_form {
            self.form.update(SignupFormState::reset);
        }
        if feedback.refetch {
            self.fetch_activities().await;
        }
        self.show_message(feedback.message).await;
    }

    /// Show `message` and, when it has a delay, hide it once the delay passes
    /// unless a newer message replaced it first.
    async fn show_message(self, message: Message) {
        let hide_after_ms = message.hide_after_ms;
        let mut generation = 0;
        self.board.update(|state| generation = state.show_message(message));

        let Some(ms) = hide_after_ms else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::TimeoutFuture::new(ms).await;
            self.board.update(|state| {
                state.hide_message(generation);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ms, generation);
        }
    }
}

fn log_failure<T>(context: &str, result: &Result<T, ApiError>) {
    #[cfg(feature = "hydrate")]
    if let Err(e) = result {
        log::error!("{context}: {e}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (context, result);
    }
}
