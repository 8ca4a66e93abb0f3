//! Activity board page: activity cards, signup form, and message area.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::message_area::MessageArea;
use crate::components::signup_form::SignupForm;
use crate::controller::BoardController;
use crate::net::types::RemovalTarget;
use crate::state::board::{ActivityList, LOAD_FAILED_TEXT, LOADING_TEXT};

/// The single page of the app. Loads the collection once on mount; every
/// later reload is driven by a successful mutation.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let controller = expect_context::<BoardController>();
    let board = controller.board();

    // Effects only run in the browser, so the initial load happens after hydration.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(controller.fetch_activities());
        }
    });

    let on_remove = Callback::new(move |target: RemovalTarget| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(controller.remove_participant(target));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    });

    let list_state = Memo::new(move |_| board.with(|s| s.list.clone()));
    let list = move || match list_state.get() {
        ActivityList::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
        ActivityList::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
        ActivityList::Loaded(entries) => entries
            .into_iter()
            .map(|entry| view! { <ActivityCard entry on_remove/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">{list}</div>
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <MessageArea/>
            </section>
        </main>
    }
}
