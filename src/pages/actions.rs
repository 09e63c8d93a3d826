use leptos::prelude::*;

use crate::components::action_table::ActionTable;
use crate::components::create_overlay::CreateOverlay;
use crate::components::detail_overlay::DetailOverlay;
use crate::components::filter_bar::FilterBar;
use crate::components::targets_panel::TargetsPanel;
use crate::components::toast::Toast;

#[component]
pub fn ActionsPage() -> impl IntoView {
    view! {
        <div class="page actions-page">
            <h2>"Actions"</h2>
            <p class="page-description">
                "Browse, filter and inspect outbound actions. Click a row for details."
            </p>
            <FilterBar />
            <ActionTable />
            <TargetsPanel />
        </div>
        <DetailOverlay />
        <CreateOverlay />
        <Toast />
    }
}
