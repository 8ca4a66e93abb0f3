//! Activity-board state for the single page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the local projection of the last successful `GET /activities`, the
//! selection options derived from it, and the message area that reports the
//! outcome of the last signup or removal attempt.
//!
//! DESIGN
//! ======
//! Every fetch replaces the list wholesale; nothing is patched in place. The
//! message area carries a generation counter so a delayed hide only applies
//! to the message it was scheduled for.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::api::ApiError;
use crate::net::types::{ActivityCollection, ActivityEntry};

/// Text shown in the list area before the first fetch resolves.
pub const LOADING_TEXT: &str = "Loading activities...";
/// Text shown in the list area when the collection cannot be loaded.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// What the activities container currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivityList {
    #[default]
    Loading,
    Loaded(Vec<ActivityEntry>),
    Failed,
}

/// Visual style of the message area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "message success",
            Self::Error => "message error",
        }
    }
}

/// A message to display, with an optional auto-hide delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    /// `None` keeps the message visible until replaced.
    pub hide_after_ms: Option<u32>,
}

impl Message {
    pub fn success(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), kind: MessageKind::Success, hide_after_ms: Some(hide_after_ms) }
    }

    pub fn error(text: impl Into<String>, hide_after_ms: Option<u32>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error, hide_after_ms }
    }
}

/// The message area. Text is kept after hiding, as the element is only
/// toggled with the `hidden` class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageArea {
    pub current: Option<Message>,
    pub hidden: bool,
    pub generation: u64,
}

impl MessageArea {
    pub fn text(&self) -> String {
        self.current.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }

    /// CSS class list for the message element.
    pub fn class(&self) -> String {
        match (&self.current, self.hidden) {
            (Some(message), false) => message.kind.class().to_owned(),
            (Some(message), true) => format!("{} hidden", message.kind.class()),
            (None, _) => "hidden".to_owned(),
        }
    }
}

/// Board-level state: activity list, selection options, and message area.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub list: ActivityList,
    /// Activity names offered by the signup selection control.
    pub options: Vec<String>,
    pub message: MessageArea,
}

impl BoardState {
    /// Apply the result of a collection fetch.
    ///
    /// Success replaces both the list and the selection options. Failure
    /// swaps the list for the fallback text and leaves the options alone.
    pub fn apply_fetch(&mut self, result: Result<ActivityCollection, ApiError>) {
        match result {
            Ok(collection) => {
                self.options = collection.names();
                self.list = ActivityList::Loaded(collection.into_entries());
            }
            Err(_) => self.list = ActivityList::Failed,
        }
    }

    /// Show `message`, returning the generation a later hide must match.
    pub fn show_message(&mut self, message: Message) -> u64 {
        self.message.generation += 1;
        self.message.current = Some(message);
        self.message.hidden = false;
        self.message.generation
    }

    /// Hide the message if it is still the one shown at `generation`.
    pub fn hide_message(&mut self, generation: u64) -> bool {
        if self.message.generation != generation {
            return false;
        }
        self.message.hidden = true;
        true
    }
}
