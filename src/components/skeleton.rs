use leptos::prelude::*;

use crate::context::use_console;
use crate::render::Region;

/// Placeholder rows shown while `region` is loading.
#[component]
pub fn Skeleton(region: Region) -> impl IntoView {
    let signals = use_console().view.region(region);

    view! {
        <div class="skeleton" class:hidden=move || !signals.loading.get() aria-hidden="true">
            {move || {
                (0..signals.skeleton_rows.get())
                    .map(|_| view! { <div class="skeleton-row"></div> })
                    .collect_view()
            }}
        </div>
    }
}

/// The region's failure message, if its last load failed.
#[component]
pub fn FailureNotice(region: Region) -> impl IntoView {
    let failure = use_console().view.region(region).failure;

    move || {
        failure
            .get()
            .map(|message| view! { <div class="region-error">{message}</div> })
    }
}
