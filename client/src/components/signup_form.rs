//! Signup form: email input plus activity selection.

use leptos::prelude::*;

use crate::controller::BoardController;

#[cfg(all(test, feature = "ssr"))]
#[path = "signup_form_test.rs"]
mod signup_form_test;

/// The signup form. Native `required`/`type="email"` constraints are the only
/// validation.
#[component]
pub fn SignupForm() -> impl IntoView {
    let controller = expect_context::<BoardController>();
    let board = controller.board();
    let form = controller.form();

    let options = move || {
        board
            .with(|state| state.options.clone())
            .into_iter()
            .map(|name| {
                let label = name.clone();
                view! { <option value=name>{label}</option> }
            })
            .collect_view()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(controller.submit_signup());
        }
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || form.with(|f| f.activity.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.activity = value);
                    }
                >
                    <option value="">"-- Select an activity --"</option>
                    {options}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
