use actions_console::app::App;
use actions_console::browser::logging;
use actions_console::config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ClientConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    let level = config.log_level().unwrap_or(tracing::Level::INFO);
    if let Err(e) = logging::init(level) {
        web_sys::console::warn_1(&format!("Logging unavailable: {e}").into());
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid client config, using defaults");
    }
    tracing::info!(api_base = %config.api_base, "starting actions console");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
