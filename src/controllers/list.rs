//! Actions table and the stand-alone targets table.

use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::controllers::generation::Generation;
use crate::models::{non_blank, Filter};
use crate::render::{ActionRow, Region, RenderTarget, TargetRow};

pub struct ListController<T, R> {
    api: Rc<ApiClient<T>>,
    render: Rc<R>,
    skeleton_rows: usize,
    actions_generation: Generation,
    targets_generation: Generation,
}

impl<T, R> Clone for ListController<T, R> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            render: Rc::clone(&self.render),
            skeleton_rows: self.skeleton_rows,
            actions_generation: self.actions_generation.clone(),
            targets_generation: self.targets_generation.clone(),
        }
    }
}

impl<T: Transport, R: RenderTarget> ListController<T, R> {
    pub fn new(api: Rc<ApiClient<T>>, render: Rc<R>, skeleton_rows: usize) -> Self {
        Self {
            api,
            render,
            skeleton_rows,
            actions_generation: Generation::default(),
            targets_generation: Generation::default(),
        }
    }

    /// Fetch the filtered actions and replace the table. Returns the number of
    /// rows rendered, or `None` when the load failed or was superseded.
    pub async fn load_actions(&self, filter: &Filter) -> Option<usize> {
        let token = self.actions_generation.advance();
        self.render.show_loading(Region::Actions, self.skeleton_rows);

        let result = self.api.list_actions(filter).await;
        if !self.actions_generation.is_current(token) {
            tracing::debug!(token, "discarding superseded actions load");
            return None;
        }

        let rendered = match result {
            Ok(list) => {
                let rows: Vec<ActionRow> = list.actions.iter().map(ActionRow::from).collect();
                let count = rows.len();
                tracing::info!(count, q = %filter.q, state = %filter.state, "loaded actions");
                self.render.render_actions(rows, list.total_count);
                Some(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load actions");
                self.render
                    .render_failure(Region::Actions, format!("Failed to load actions: {}", e));
                None
            }
        };
        self.render.hide_loading(Region::Actions);
        rendered
    }

    /// Fetch and render the targets of one action. A blank id is ignored.
    pub async fn load_targets(&self, action_id: &str) -> Option<usize> {
        let Some(action_id) = non_blank(Some(action_id)) else {
            return None;
        };
        let token = self.targets_generation.advance();
        self.render.show_loading(Region::Targets, self.skeleton_rows);

        let result = self.api.list_targets(action_id).await;
        if !self.targets_generation.is_current(token) {
            tracing::debug!(token, "discarding superseded targets load");
            return None;
        }

        let rendered = match result {
            Ok(targets) => {
                let rows: Vec<TargetRow> = targets
                    .iter()
                    .enumerate()
                    .map(|(i, t)| TargetRow::new(format!("{}:target:{}", token, i), t))
                    .collect();
                let count = rows.len();
                tracing::info!(count, %action_id, "loaded targets");
                self.render.render_targets(Region::Targets, rows);
                Some(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, %action_id, "failed to load targets");
                self.render
                    .render_failure(Region::Targets, format!("Failed to load targets: {}", e));
                None
            }
        };
        self.render.hide_loading(Region::Targets);
        rendered
    }
}
