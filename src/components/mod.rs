pub mod action_table;
pub mod create_overlay;
pub mod detail_overlay;
pub mod filter_bar;
pub mod profile_card;
pub mod sidebar;
pub mod skeleton;
pub mod status_badge;
pub mod targets_panel;
pub mod toast;
