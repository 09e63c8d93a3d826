use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::skeleton::Skeleton;
use crate::components::status_badge::StatusBadge;
use crate::context::use_console;
use crate::render::Region;

const ROW_SELECTOR: &str = "tr[data-action-id]";

/// Id of the row under a click anywhere inside the table body.
fn clicked_action_id(ev: &web_sys::MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let row = element.closest(ROW_SELECTOR).ok()??;
    row.get_attribute("data-action-id")
}

#[component]
pub fn ActionTable() -> impl IntoView {
    let ctx = use_console();
    let view = ctx.view;
    let failure = view.region(Region::Actions).failure;

    // One listener for the whole body; rows come and go with each load.
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(id) = clicked_action_id(&ev) else {
            return;
        };
        ctx.run(move |console| async move { console.activate_row(&id).await });
    };

    view! {
        <section class="card actions-card">
            <div class="card-header">
                <h3>"Actions"</h3>
                <span class="card-count">
                    {move || view.total.get().map(|n| format!("{n} actions"))}
                </span>
            </div>
            <Skeleton region=Region::Actions />
            <table class="data-table actions-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Type"</th>
                        <th>"Platform"</th>
                        <th>"State"</th>
                        <th>"Created by"</th>
                    </tr>
                </thead>
                <tbody on:click=on_click>
                    {move || match failure.get() {
                        Some(message) => view! {
                            <tr class="error-row">
                                <td colspan="5">{message}</td>
                            </tr>
                        }
                        .into_any(),
                        None => view
                            .actions
                            .get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="clickable-row" data-action-id=row.id>
                                        <td class="cell-title">{row.title}</td>
                                        <td>{row.kind}</td>
                                        <td><StatusBadge label=row.platform /></td>
                                        <td><StatusBadge label=row.state /></td>
                                        <td>{row.created_by}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </section>
    }
}
