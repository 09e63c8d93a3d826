use std::rc::Rc;
use std::time::Duration;

use crate::controllers::generation::Generation;
use crate::controllers::overlay::Overlay;
use crate::render::{RenderTarget, Surface};
use crate::scheduler::Scheduler;

/// Transient notification. Shares the overlay lifecycle; a newer message
/// restarts the dwell timer and the older one never closes it.
pub struct Toast<R, S> {
    overlay: Overlay<R, S>,
    render: Rc<R>,
    scheduler: Rc<S>,
    dwell: Duration,
    generation: Generation,
}

impl<R, S> Clone for Toast<R, S> {
    fn clone(&self) -> Self {
        Self {
            overlay: self.overlay.clone(),
            render: Rc::clone(&self.render),
            scheduler: Rc::clone(&self.scheduler),
            dwell: self.dwell,
            generation: self.generation.clone(),
        }
    }
}

impl<R: RenderTarget, S: Scheduler> Toast<R, S> {
    pub fn new(render: Rc<R>, scheduler: Rc<S>, transition: Duration, dwell: Duration) -> Self {
        Self {
            overlay: Overlay::new(
                Surface::Toast,
                Rc::clone(&render),
                Rc::clone(&scheduler),
                transition,
            ),
            render,
            scheduler,
            dwell,
            generation: Generation::default(),
        }
    }

    pub fn overlay(&self) -> &Overlay<R, S> {
        &self.overlay
    }

    /// Show `message`, keep it up for the dwell time, then dismiss it.
    pub async fn show(&self, message: impl Into<String>) {
        let token = self.announce(message.into());
        self.dismiss_after_dwell(token).await;
    }

    fn announce(&self, message: String) -> u64 {
        tracing::info!(%message, "toast");
        let token = self.generation.advance();
        self.render.set_toast(message);
        token
    }

    async fn dismiss_after_dwell(&self, token: u64) {
        futures::join!(self.overlay.open(), self.scheduler.sleep(self.dwell));
        if self.generation.is_current(token) {
            self.overlay.close().await;
        }
    }
}

impl<R: RenderTarget + 'static, S: Scheduler + 'static> Toast<R, S> {
    /// Like [`show`](Self::show), but returns as soon as the message is set;
    /// the dwell and dismissal run as a detached task.
    pub fn post(&self, message: impl Into<String>) {
        let token = self.announce(message.into());
        let toast = self.clone();
        self.scheduler
            .spawn(async move { toast.dismiss_after_dwell(token).await });
    }
}
