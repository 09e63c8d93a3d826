use leptos::prelude::*;

use crate::components::profile_card::{ProfileCard, TargetCard};
use crate::components::skeleton::{FailureNotice, Skeleton};
use crate::context::use_console;
use crate::render::{DetailHeader, Region, Surface};

fn header_view(header: Option<DetailHeader>) -> AnyView {
    let Some(header) = header else {
        return view! {
            <div class="detail-header">
                <div class="skeleton-row skeleton-title"></div>
            </div>
        }
        .into_any();
    };
    let fields = header
        .fields
        .into_iter()
        .map(|field| {
            view! {
                <dt>{field.label}</dt>
                <dd>{field.value}</dd>
            }
        })
        .collect_view();

    view! {
        <div class="detail-header">
            <h2 class="detail-title">{header.title}</h2>
            <p class="detail-meta">{header.meta}</p>
            <dl class="detail-fields">{fields}</dl>
        </div>
    }
    .into_any()
}

#[component]
pub fn DetailOverlay() -> impl IntoView {
    let ctx = use_console();
    let view = ctx.view;
    let surface = view.surface(Surface::Detail);

    let close = move |_| ctx.run(|console| async move { console.close_detail().await });

    view! {
        <div
            class="overlay detail-overlay"
            class:hidden=move || !surface.visible.get()
            class:entered=move || surface.entered.get()
        >
            <div class="overlay-backdrop" on:click=close></div>
            <div class="overlay-panel" role="dialog" aria-modal="true">
                <button class="overlay-close" aria-label="Close" on:click=close>"\u{2715}"</button>
                {move || header_view(view.header.get())}

                <h3>"Targets"</h3>
                <Skeleton region=Region::DetailTargets />
                <FailureNotice region=Region::DetailTargets />
                <div class="card-grid">
                    {move || {
                        view.detail_targets
                            .get()
                            .into_iter()
                            .map(|target| view! { <TargetCard target=target /> })
                            .collect_view()
                    }}
                </div>

                <h3>"Collected profiles"</h3>
                <Skeleton region=Region::DetailCollected />
                <FailureNotice region=Region::DetailCollected />
                <div class="card-grid">
                    {move || {
                        view.collected
                            .get()
                            .into_iter()
                            .map(|profile| view! { <ProfileCard profile=profile /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
