use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{BrowserRender, BrowserScheduler, HttpTransport, ViewState};
use crate::config::ClientConfig;
use crate::controllers::Console;

pub type BrowserConsole = Console<HttpTransport, BrowserRender, BrowserScheduler>;

/// Handle shared with every component through Leptos context.
///
/// The console itself is `!Send`, so it lives in local arena storage and
/// components only ever hold this `Copy` handle.
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    console: StoredValue<BrowserConsole, LocalStorage>,
    pub view: ViewState,
}

impl ConsoleContext {
    pub fn new(config: ClientConfig) -> Self {
        let view = ViewState::new();
        let transport = HttpTransport::new(config.api_base.clone());
        let console = Console::new(config, transport, BrowserRender::new(view), BrowserScheduler);
        Self {
            console: StoredValue::new_local(console),
            view,
        }
    }

    /// Spawn `task` on the UI thread with a handle to the console.
    pub fn run<F, Fut>(&self, task: F)
    where
        F: FnOnce(BrowserConsole) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        match self.console.try_get_value() {
            Some(console) => spawn_local(task(console)),
            None => tracing::debug!("console already disposed"),
        }
    }
}

pub fn use_console() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}
