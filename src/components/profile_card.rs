use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::context::use_console;
use crate::render::{ProfileCard as ProfileCardModel, TargetRow};

/// Reactive "has this key been revealed yet" check.
fn revealed(key: String) -> impl Fn() -> bool + Send + Sync + 'static {
    let revealed = use_console().view.revealed;
    move || revealed.with(|keys| keys.contains(&key))
}

#[component]
pub fn TargetCard(target: TargetRow) -> impl IntoView {
    let is_revealed = revealed(target.key.clone());
    let link = target.link.map(|href| {
        let text = href.clone();
        view! { <a class="card-link" href=href target="_blank" rel="noopener">{text}</a> }
    });

    view! {
        <div class="card reveal target-card" class:revealed=is_revealed data-reveal-key=target.key>
            <div class="card-title">{target.person}</div>
            <div class="card-meta">
                {target.platform}
                " "
                <StatusBadge label=target.status />
            </div>
            {link}
        </div>
    }
}

#[component]
pub fn ProfileCard(profile: ProfileCardModel) -> impl IntoView {
    let is_revealed = revealed(profile.key.clone());
    let avatar = (!profile.avatar_url.is_empty()).then(|| {
        view! { <img class="avatar" src=profile.avatar_url.clone() alt="" loading="lazy" /> }
    });
    let link = profile.link.map(|href| {
        view! { <a class="card-link" href=href target="_blank" rel="noopener">"Open profile"</a> }
    });

    view! {
        <div class="card reveal profile-card" class:revealed=is_revealed data-reveal-key=profile.key>
            {avatar}
            <div class="profile-body">
                <div class="card-title">{profile.name}</div>
                <div class="card-meta">{profile.meta}</div>
                <p class="profile-intro">{profile.introduction}</p>
                {link}
            </div>
        </div>
    }
}
