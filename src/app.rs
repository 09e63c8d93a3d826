use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::config::ClientConfig;
use crate::context::ConsoleContext;
use crate::pages::actions::ActionsPage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = ConsoleContext::new(config);
    provide_context(ctx);

    // Initial load once the page has mounted
    Effect::new(move |_| {
        ctx.run(|console| async move { console.start().await });
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="content">
                <ActionsPage />
            </main>
        </div>
    }
}
