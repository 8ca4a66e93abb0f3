//! Card for one activity: summary, roster, and per-participant removal.
//!
//! The summary block is a markup template with name, description, and
//! schedule entity-escaped; the roster is built from text nodes so emails are
//! never escaped.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::net::types::{Activity, ActivityEntry, RemovalTarget};
use crate::util::escape::escape_html;

/// Text of the single roster entry shown for an empty activity.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";

/// One roster line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterEntry {
    Participant(RemovalTarget),
    Placeholder,
}

/// Summary markup for the top of a card.
pub fn card_markup(name: &str, activity: &Activity) -> String {
    format!(
        "<h4>{}</h4>\
         <p>{}</p>\
         <p><strong>Schedule:</strong> {}</p>\
         <p><strong>Availability:</strong> {} spots left</p>",
        escape_html(name),
        escape_html(&activity.description),
        escape_html(&activity.schedule),
        activity.spots_left(),
    )
}

/// Roster lines for an activity, each participant carrying its removal context.
pub fn roster_entries(name: &str, activity: &Activity) -> Vec<RosterEntry> {
    if activity.participants.is_empty() {
        return vec![RosterEntry::Placeholder];
    }
    activity
        .participants
        .iter()
        .map(|participant| {
            RosterEntry::Participant(RemovalTarget { activity: name.to_owned(), participant: participant.clone() })
        })
        .collect()
}

/// A rendered activity card.
#[component]
pub fn ActivityCard(entry: ActivityEntry, on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let markup = card_markup(&entry.name, &entry.activity);
    let count = entry.activity.participant_count();
    let rows = roster_entries(&entry.name, &entry.activity)
        .into_iter()
        .map(|row| view! { <RosterRow row on_remove/> })
        .collect_view();

    view! {
        <div class="activity-card">
            <div class="activity-card__summary" inner_html=markup></div>
            <div class="participants-section">
                <strong>{format!("Participants ({count}):")}</strong>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}

#[component]
fn RosterRow(row: RosterEntry, on_remove: Callback<RemovalTarget>) -> impl IntoView {
    match row {
        RosterEntry::Placeholder => view! { <li class="no-participants">{NO_PARTICIPANTS_TEXT}</li> }.into_any(),
        RosterEntry::Participant(target) => {
            let label = target.participant.clone();
            let title = format!("Unregister {}", target.participant);
            view! {
                <li class="participant-item">
                    <span class="participant-name">{label}</span>
                    <button
                        class="delete-btn"
                        title=title
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            on_remove.run(target.clone());
                        }
                    >
                        "×"
                    </button>
                </li>
            }
                .into_any()
        }
    }
}
