use leptos::prelude::*;

use crate::components::skeleton::Skeleton;
use crate::components::status_badge::StatusBadge;
use crate::context::use_console;
use crate::render::{Region, TargetRow};

fn target_row(row: TargetRow) -> impl IntoView {
    let link = match row.link {
        Some(href) => {
            let text = href.clone();
            view! { <a href=href target="_blank" rel="noopener">{text}</a> }.into_any()
        }
        None => "-".into_any(),
    };
    view! {
        <tr>
            <td>{row.person}</td>
            <td>{row.platform}</td>
            <td class="cell-link">{link}</td>
            <td><StatusBadge label=row.status /></td>
        </tr>
    }
}

/// Targets of a single action, looked up by id.
#[component]
pub fn TargetsPanel() -> impl IntoView {
    let ctx = use_console();
    let rows = ctx.view.targets;
    let failure = ctx.view.region(Region::Targets).failure;
    let action_id = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = action_id.get_untracked();
        ctx.run(move |console| async move { console.lookup_targets(&id).await });
    };

    view! {
        <section class="card targets-card">
            <div class="card-header">
                <h3>"Targets"</h3>
                <form class="inline-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="input"
                        placeholder="Action id"
                        prop:value=move || action_id.get()
                        on:input=move |ev| action_id.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-secondary">"Lookup"</button>
                </form>
            </div>
            <Skeleton region=Region::Targets />
            <table class="data-table targets-table">
                <thead>
                    <tr>
                        <th>"Person"</th>
                        <th>"Platform"</th>
                        <th>"Link"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match failure.get() {
                        Some(message) => view! {
                            <tr class="error-row">
                                <td colspan="4">{message}</td>
                            </tr>
                        }
                        .into_any(),
                        None => rows.get().into_iter().map(target_row).collect_view().into_any(),
                    }}
                </tbody>
            </table>
        </section>
    }
}
