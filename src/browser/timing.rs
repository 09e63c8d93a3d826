use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::scheduler::Scheduler;

/// `requestAnimationFrame` for frame yields, `setTimeout` for delays.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    async fn next_frame(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (tx, rx) = oneshot::channel::<()>();
        let callback = Closure::once_into_js(move || {
            let _ = tx.send(());
        });
        if window
            .request_animation_frame(callback.unchecked_ref())
            .is_err()
        {
            return;
        }
        let _ = rx.await;
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
