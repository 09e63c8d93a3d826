//! Wiring of the controllers behind the page's user interactions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::config::ClientConfig;
use crate::controllers::create::{failure_message, CreateForm, SubmitOutcome};
use crate::controllers::detail::DetailController;
use crate::controllers::list::ListController;
use crate::controllers::overlay::Overlay;
use crate::controllers::toast::Toast;
use crate::models::Filter;
use crate::render::{RenderTarget, Surface};
use crate::scheduler::Scheduler;

pub const CREATED_MESSAGE: &str = "Action created successfully.";

struct Inner<T, R, S> {
    config: ClientConfig,
    api: Rc<ApiClient<T>>,
    render: Rc<R>,
    scheduler: Rc<S>,
    list: ListController<T, R>,
    detail: DetailController<T, R, S>,
    detail_overlay: Overlay<R, S>,
    create_overlay: Overlay<R, S>,
    toast: Toast<R, S>,
    filter: RefCell<Filter>,
    submitting: Cell<bool>,
}

/// Entry point for every user interaction on the actions page.
pub struct Console<T, R, S> {
    inner: Rc<Inner<T, R, S>>,
}

impl<T, R, S> Clone for Console<T, R, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport, R: RenderTarget + 'static, S: Scheduler + 'static> Console<T, R, S> {
    pub fn new(config: ClientConfig, transport: T, render: R, scheduler: S) -> Self {
        let api = Rc::new(ApiClient::new(transport));
        let render = Rc::new(render);
        let scheduler = Rc::new(scheduler);
        let transition = config.transition();

        let list = ListController::new(Rc::clone(&api), Rc::clone(&render), config.list_skeleton_rows);
        let detail = DetailController::new(
            Rc::clone(&api),
            Rc::clone(&render),
            Rc::clone(&scheduler),
            config.detail_skeleton_rows,
        );
        let detail_overlay = Overlay::new(
            Surface::Detail,
            Rc::clone(&render),
            Rc::clone(&scheduler),
            transition,
        );
        let create_overlay = Overlay::new(
            Surface::Create,
            Rc::clone(&render),
            Rc::clone(&scheduler),
            transition,
        );
        let toast = Toast::new(
            Rc::clone(&render),
            Rc::clone(&scheduler),
            transition,
            config.toast_dwell(),
        );

        Self {
            inner: Rc::new(Inner {
                config,
                api,
                render,
                scheduler,
                list,
                detail,
                detail_overlay,
                create_overlay,
                toast,
                filter: RefCell::new(Filter::default()),
                submitting: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn render(&self) -> &R {
        &self.inner.render
    }

    pub fn list(&self) -> &ListController<T, R> {
        &self.inner.list
    }

    pub fn detail(&self) -> &DetailController<T, R, S> {
        &self.inner.detail
    }

    pub fn detail_overlay(&self) -> &Overlay<R, S> {
        &self.inner.detail_overlay
    }

    pub fn create_overlay(&self) -> &Overlay<R, S> {
        &self.inner.create_overlay
    }

    pub fn toast(&self) -> &Toast<R, S> {
        &self.inner.toast
    }

    pub fn filter(&self) -> Filter {
        self.inner.filter.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.submitting.get()
    }

    /// First load after the page settles.
    pub async fn start(&self) {
        self.inner
            .scheduler
            .sleep(self.inner.config.initial_load_delay())
            .await;
        self.refresh().await;
    }

    /// Store `filter` and reload the table with it.
    pub async fn apply_filter(&self, filter: Filter) {
        *self.inner.filter.borrow_mut() = filter;
        self.refresh().await;
    }

    pub async fn refresh(&self) {
        let filter = self.filter();
        self.inner.list.load_actions(&filter).await;
    }

    pub async fn lookup_targets(&self, action_id: &str) {
        self.inner.list.load_targets(action_id).await;
    }

    /// A row of the actions table was clicked.
    pub async fn activate_row(&self, action_id: &str) {
        tracing::debug!(%action_id, "row activated");
        futures::join!(
            self.inner.detail_overlay.open(),
            self.inner.detail.populate(action_id)
        );
    }

    pub async fn close_detail(&self) {
        self.inner.detail_overlay.close().await;
    }

    pub async fn open_create(&self) {
        self.inner.create_overlay.open().await;
    }

    pub async fn close_create(&self) {
        self.inner.create_overlay.close().await;
    }

    /// Validate and submit the create form. On success the overlay closes and
    /// the table reloads with the current filter; on failure the overlay stays.
    /// Returns once that is done; the toast dismisses itself later.
    pub async fn submit_create(&self, form: &CreateForm) -> SubmitOutcome {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::info!(error = ?e, "create form incomplete");
                self.inner.toast.post(e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        if self.is_submitting() {
            tracing::debug!("submit already in flight");
            return SubmitOutcome::InFlight;
        }
        self.inner.submitting.set(true);
        self.inner.render.set_busy(Surface::Create, true);
        let result = self.inner.api.create_action(&payload).await;
        self.inner.submitting.set(false);
        self.inner.render.set_busy(Surface::Create, false);

        match result {
            Ok(()) => {
                tracing::info!(title = %payload.title, "action created");
                self.inner.toast.post(CREATED_MESSAGE);
                futures::join!(self.close_create(), self.refresh());
                SubmitOutcome::Created
            }
            Err(e) => {
                tracing::warn!(error = %e, "create failed");
                self.inner.toast.post(failure_message(&e));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::controllers::overlay::OverlayState;
    use crate::error::ApiError;
    use crate::render::Region;
    use crate::test_support::{local, FakeTransport, RecordingRender, RenderEvent, TokioScheduler};
    use std::time::Duration;

    type TestConsole = Console<FakeTransport, RecordingRender, TokioScheduler>;

    const TWO_ACTIONS: &str = r#"{"data":{"actions":[{"id":"a1","title":"Launch"},{"id":"a2","title":"Follow up"}]}}"#;

    fn console(transport: FakeTransport) -> TestConsole {
        Console::new(
            ClientConfig::default(),
            transport,
            RecordingRender::default(),
            TokioScheduler,
        )
    }

    fn render(console: &TestConsole) -> &RecordingRender {
        &console.inner.render
    }

    fn sent(console: &TestConsole) -> &FakeTransport {
        console.inner.api.transport()
    }

    fn filled_form() -> CreateForm {
        CreateForm {
            title: "Launch".into(),
            created_by: "x".into(),
            owner_id: "y".into(),
            ..CreateForm::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_activating_row_opens_detail_for_that_row() {
        let transport = FakeTransport::new();
        transport.respond("/actions?", 200, TWO_ACTIONS);
        transport.respond("/actions/a2", 200, r#"{"data":{"action":{"id":"a2","title":"Follow up"}}}"#);
        let console = console(transport);

        console.refresh().await;
        let rows = render(&console).actions();
        assert_eq!(rows.len(), 2);

        console.activate_row(&rows[1].id).await;
        assert_eq!(console.detail_overlay().state(), OverlayState::Open);
        assert_eq!(render(&console).header().unwrap().title, "Follow up");
        let paths = sent(&console).paths();
        assert!(paths.contains(&"/actions/a2/targets".to_string()));
        assert!(paths.contains(&"/actions/a2/collected".to_string()));
        assert!(!paths.iter().any(|p| p.starts_with("/actions/a1")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_waits_for_initial_delay() {
        let transport = FakeTransport::new();
        transport.respond("/actions?", 200, TWO_ACTIONS);
        let console = console(transport);

        let started = tokio::time::Instant::now();
        console.start().await;
        assert!(started.elapsed() >= console.config().initial_load_delay());
        assert_eq!(render(&console).actions().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_filter_is_kept_for_refresh() {
        let transport = FakeTransport::new();
        transport.respond("/actions?state=DONE", 200, r#"{"data":{"actions":[]}}"#);
        let console = console(transport);

        console.apply_filter(Filter::new("", "DONE")).await;
        console.refresh().await;
        assert_eq!(
            sent(&console).paths(),
            vec!["/actions?state=DONE", "/actions?state=DONE"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_title_never_reaches_transport() {
        local(async {
            let console = console(FakeTransport::new());
            let form = CreateForm {
                title: String::new(),
                ..filled_form()
            };

            let outcome = console.submit_create(&form).await;
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
            assert!(sent(&console).requests().is_empty());
            assert_eq!(render(&console).toast(), "Please fill required fields.");
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_create_closes_overlay_and_reloads() {
        local(async {
            let transport = FakeTransport::new();
            transport.respond_post("/actions", 200, r#"{"data":{"id":"new"}}"#);
            transport.respond("/actions?", 200, TWO_ACTIONS);
            let console = console(transport);
            console.open_create().await;

            let form = CreateForm {
                media: "u1, u2".into(),
                ..filled_form()
            };
            assert_eq!(console.submit_create(&form).await, SubmitOutcome::Created);

            let posts: Vec<_> = sent(&console)
                .requests()
                .into_iter()
                .filter(|r| r.method == Method::Post)
                .collect();
            assert_eq!(posts.len(), 1);
            let body: serde_json::Value =
                serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
            assert_eq!(body["contentBlobURL"], serde_json::json!(["u1", "u2"]));
            assert_eq!(body["executionInterval"], 0);

            assert_eq!(console.create_overlay().state(), OverlayState::Closed);
            assert_eq!(render(&console).toast(), CREATED_MESSAGE);
            assert_eq!(render(&console).actions().len(), 2);
            assert!(!console.is_submitting());
            let busy: Vec<_> = render(&console)
                .events()
                .into_iter()
                .filter(|e| matches!(e, RenderEvent::Busy(..)))
                .collect();
            assert_eq!(
                busy,
                vec![
                    RenderEvent::Busy(Surface::Create, true),
                    RenderEvent::Busy(Surface::Create, false)
                ]
            );
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_returns_before_toast_dwell_ends() {
        local(async {
            let transport = FakeTransport::new();
            transport.respond_post("/actions", 201, "");
            transport.respond("/actions?", 200, TWO_ACTIONS);
            let console = console(transport);
            console.open_create().await;

            let started = tokio::time::Instant::now();
            assert_eq!(console.submit_create(&filled_form()).await, SubmitOutcome::Created);
            assert!(started.elapsed() < console.config().toast_dwell());
            assert!(render(&console).surface(Surface::Toast).visible);

            tokio::time::sleep(Duration::from_millis(3500)).await;
            assert!(!render(&console).surface(Surface::Toast).visible);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_create_reports_body_and_stays_open() {
        local(async {
            let transport = FakeTransport::new();
            transport.respond_post("/actions", 500, "db error");
            let console = console(transport);
            console.open_create().await;

            let outcome = console.submit_create(&filled_form()).await;
            assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Status { status: 500, .. })));
            assert_eq!(render(&console).toast(), "Failed to create action: db error");
            assert_eq!(console.create_overlay().state(), OverlayState::Open);
            assert!(render(&console).surface(Surface::Create).visible);
            assert!(render(&console).region(Region::Actions) == Default::default());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_failure_on_create_is_surfaced() {
        local(async {
            let transport = FakeTransport::new();
            transport.fail(Method::Post, "/actions", ApiError::Network("offline".into()));
            let console = console(transport);

            console.submit_create(&filled_form()).await;
            assert_eq!(
                render(&console).toast(),
                "Failed to create action: Network error: offline"
            );
        })
        .await;
    }
}
