use leptos::prelude::*;

/// CSS modifier for a state, platform or delivery status value.
pub fn badge_class(value: &str) -> String {
    let slug: String = value
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    if slug.is_empty() || slug == "-" {
        "status-badge status-unknown".to_string()
    } else {
        format!("status-badge status-{slug}")
    }
}

#[component]
pub fn StatusBadge(
    /// The value shown, e.g. "PENDING" or "INSTAGRAM"
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let class = badge_class(&label);
    view! { <span class=class>{label}</span> }
}
