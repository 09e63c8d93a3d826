//! Population of the detail overlay.
//!
//! Three fetches (action, targets, collected profiles) are dispatched together
//! and joined. Each sub-region renders and drops its skeleton as soon as its
//! own fetch lands; only the reveal pass waits for all three.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::controllers::generation::Generation;
use crate::controllers::reveal::RevealTracker;
use crate::render::{
    DetailHeader, ProfileCard, Region, RenderTarget, SharedReveal, TargetRow,
};
use crate::scheduler::Scheduler;

pub struct DetailController<T, R, S> {
    api: Rc<ApiClient<T>>,
    render: Rc<R>,
    scheduler: Rc<S>,
    skeleton_rows: usize,
    generation: Generation,
    reveal: SharedReveal,
}

impl<T, R, S> Clone for DetailController<T, R, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            render: Rc::clone(&self.render),
            scheduler: Rc::clone(&self.scheduler),
            skeleton_rows: self.skeleton_rows,
            generation: self.generation.clone(),
            reveal: Rc::clone(&self.reveal),
        }
    }
}

impl<T: Transport, R: RenderTarget, S: Scheduler> DetailController<T, R, S> {
    pub fn new(
        api: Rc<ApiClient<T>>,
        render: Rc<R>,
        scheduler: Rc<S>,
        skeleton_rows: usize,
    ) -> Self {
        Self {
            api,
            render,
            scheduler,
            skeleton_rows,
            generation: Generation::default(),
            reveal: Rc::new(RefCell::new(RevealTracker::new())),
        }
    }

    pub fn reveal_tracker(&self) -> SharedReveal {
        Rc::clone(&self.reveal)
    }

    /// Fill the detail overlay for `action_id`. Returns `false` when a newer
    /// populate superseded this one; its results were discarded.
    pub async fn populate(&self, action_id: &str) -> bool {
        let token = self.generation.advance();
        tracing::debug!(token, %action_id, "populating detail");

        self.render.render_detail_header(None);
        self.render.clear(Region::DetailTargets);
        self.render.clear(Region::DetailCollected);
        self.render.show_loading(Region::DetailTargets, self.skeleton_rows);
        self.render.show_loading(Region::DetailCollected, self.skeleton_rows);

        let header = async {
            let result = self.api.get_action(action_id).await;
            if !self.generation.is_current(token) {
                return;
            }
            match result {
                Ok(Some(action)) => self
                    .render
                    .render_detail_header(Some(DetailHeader::from(&action))),
                Ok(None) => {
                    tracing::debug!(%action_id, "action missing from envelope");
                    self.render.render_detail_header(Some(DetailHeader::default()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, %action_id, "failed to load action");
                    self.render.render_detail_header(Some(DetailHeader::failed(format!(
                        "Failed to load action: {}",
                        e
                    ))));
                }
            }
        };

        let targets = async {
            let result = self.api.list_targets(action_id).await;
            if !self.generation.is_current(token) {
                return Vec::new();
            }
            let keys = match result {
                Ok(targets) => {
                    let cards: Vec<TargetRow> = targets
                        .iter()
                        .enumerate()
                        .map(|(i, t)| TargetRow::new(format!("{}:target:{}", token, i), t))
                        .collect();
                    let keys = cards.iter().map(|c| c.key.clone()).collect();
                    self.render.render_targets(Region::DetailTargets, cards);
                    keys
                }
                Err(e) => {
                    tracing::warn!(error = %e, %action_id, "failed to load detail targets");
                    self.render.render_failure(
                        Region::DetailTargets,
                        format!("Failed to load targets: {}", e),
                    );
                    Vec::new()
                }
            };
            self.render.hide_loading(Region::DetailTargets);
            keys
        };

        let collected = async {
            let result = self.api.list_collected(action_id).await;
            if !self.generation.is_current(token) {
                return Vec::new();
            }
            let keys = match result {
                Ok(profiles) => {
                    let cards: Vec<ProfileCard> = profiles
                        .iter()
                        .enumerate()
                        .map(|(i, p)| ProfileCard::new(format!("{}:profile:{}", token, i), p))
                        .collect();
                    let keys = cards.iter().map(|c| c.key.clone()).collect();
                    self.render.render_collected(cards);
                    keys
                }
                Err(e) => {
                    tracing::warn!(error = %e, %action_id, "failed to load collected profiles");
                    self.render.render_failure(
                        Region::DetailCollected,
                        format!("Failed to load profiles: {}", e),
                    );
                    Vec::new()
                }
            };
            self.render.hide_loading(Region::DetailCollected);
            keys
        };

        let ((), target_keys, profile_keys) = futures::join!(header, targets, collected);
        if !self.generation.is_current(token) {
            tracing::debug!(token, %action_id, "discarding superseded detail");
            return false;
        }

        // Let the new cards reach the document before observing them.
        self.scheduler.next_frame().await;
        if !self.generation.is_current(token) {
            return false;
        }
        let batch = self
            .reveal
            .borrow_mut()
            .begin_pass(token, target_keys.into_iter().chain(profile_keys));
        if !batch.is_empty() {
            self.render.observe_reveal(batch, Rc::clone(&self.reveal));
        }
        true
    }
}
