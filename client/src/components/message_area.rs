//! Message area reporting the outcome of the last signup or removal.

use leptos::prelude::*;

use crate::controller::BoardController;

#[component]
pub fn MessageArea() -> impl IntoView {
    let board = expect_context::<BoardController>().board();

    view! {
        <div id="message" class=move || board.with(|s| s.message.class())>
            {move || board.with(|s| s.message.text())}
        </div>
    }
}
