use leptos::prelude::*;

use crate::context::use_console;
use crate::render::Surface;

#[component]
pub fn Toast() -> impl IntoView {
    let view = use_console().view;
    let surface = view.surface(Surface::Toast);

    view! {
        <div
            class="toast"
            class:hidden=move || !surface.visible.get()
            class:entered=move || surface.entered.get()
            role="status"
            aria-live="polite"
        >
            {move || view.toast.get()}
        </div>
    }
}
