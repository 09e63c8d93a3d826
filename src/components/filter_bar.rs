use leptos::prelude::*;

use crate::context::use_console;
use crate::models::{Filter, ACTION_STATES};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_console();
    let q = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());

    let apply = move || {
        let filter = Filter::new(q.get_untracked(), state.get_untracked());
        ctx.run(move |console| async move { console.apply_filter(filter).await });
    };

    view! {
        <form
            class="filter-bar"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                apply();
            }
        >
            <input
                type="search"
                class="input"
                placeholder="Search actions"
                prop:value=move || q.get()
                on:input=move |ev| q.set(event_target_value(&ev))
            />
            <select
                class="select"
                prop:value=move || state.get()
                on:change=move |ev| {
                    state.set(event_target_value(&ev));
                    apply();
                }
            >
                <option value="">"All states"</option>
                {ACTION_STATES
                    .iter()
                    .map(|s| view! { <option value=*s>{*s}</option> })
                    .collect_view()}
            </select>
            <button type="submit" class="btn btn-primary">"Filter"</button>
        </form>
    }
}
