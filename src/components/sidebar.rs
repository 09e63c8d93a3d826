use leptos::prelude::*;

use crate::context::use_console;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_console();
    let busy = ctx.view.region(crate::render::Region::Actions).loading;

    let open_create = move |_| ctx.run(|console| async move { console.open_create().await });
    let refresh = move |_| ctx.run(|console| async move { console.refresh().await });

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Actions"</h1>
                <p class="sidebar-subtitle">"Outbound campaign console"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <button class="btn btn-primary" on:click=open_create>"New action"</button>
                </li>
                <li class="nav-item">
                    <button
                        class="btn btn-secondary"
                        prop:disabled=move || busy.get()
                        on:click=refresh
                    >
                        "Refresh"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
