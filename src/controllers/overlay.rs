//! Enter/exit lifecycle of a modal surface.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::controllers::generation::Generation;
use crate::render::{RenderTarget, Surface};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Drives one surface through `Closed → Opening → Open → Closing → Closed`.
///
/// Every open/close takes a generation token. A pending step whose token has
/// been superseded does nothing, so a reopen cancels an in-flight hide.
pub struct Overlay<R, S> {
    surface: Surface,
    render: Rc<R>,
    scheduler: Rc<S>,
    transition: Duration,
    state: Rc<Cell<OverlayState>>,
    generation: Generation,
}

impl<R, S> Clone for Overlay<R, S> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface,
            render: Rc::clone(&self.render),
            scheduler: Rc::clone(&self.scheduler),
            transition: self.transition,
            state: Rc::clone(&self.state),
            generation: self.generation.clone(),
        }
    }
}

impl<R: RenderTarget, S: Scheduler> Overlay<R, S> {
    pub fn new(surface: Surface, render: Rc<R>, scheduler: Rc<S>, transition: Duration) -> Self {
        Self {
            surface,
            render,
            scheduler,
            transition,
            state: Rc::new(Cell::new(OverlayState::Closed)),
            generation: Generation::default(),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state.get(), OverlayState::Opening | OverlayState::Open)
    }

    pub async fn open(&self) {
        let token = self.generation.advance();
        self.state.set(OverlayState::Opening);
        self.render.set_visible(self.surface, true);

        // The container must be painted un-entered once for the transition to run.
        self.scheduler.next_frame().await;
        if !self.generation.is_current(token) {
            return;
        }
        self.render.set_entered(self.surface, true);

        self.scheduler.sleep(self.transition).await;
        if self.generation.is_current(token) {
            self.state.set(OverlayState::Open);
            tracing::trace!(surface = ?self.surface, "overlay open");
        }
    }

    pub async fn close(&self) {
        if matches!(
            self.state.get(),
            OverlayState::Closed | OverlayState::Closing
        ) {
            return;
        }
        let token = self.generation.advance();
        self.state.set(OverlayState::Closing);
        self.render.set_entered(self.surface, false);

        self.scheduler.sleep(self.transition).await;
        if self.generation.is_current(token) {
            self.render.set_visible(self.surface, false);
            self.state.set(OverlayState::Closed);
            tracing::trace!(surface = ?self.surface, "overlay closed");
        } else {
            tracing::debug!(surface = ?self.surface, "hide cancelled by reopen");
        }
    }
}
