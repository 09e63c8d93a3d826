//! In-memory doubles for the transport, the document and the clock.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use crate::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::controllers::reveal::RevealBatch;
use crate::error::ApiError;
use crate::render::{
    ActionRow, DetailHeader, ProfileCard, Region, RenderTarget, SharedReveal, Surface, TargetRow,
};
use crate::scheduler::Scheduler;

/// Length of one simulated animation frame.
pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone)]
struct Route {
    delay: Option<Duration>,
    result: Result<ApiResponse, ApiError>,
}

/// Canned responses keyed by method and path. Unknown paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), Route>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(&self, method: Method, path: &str, route: Route) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), route);
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.route(
            Method::Get,
            path,
            Route {
                delay: None,
                result: Ok(ApiResponse::new(status, body)),
            },
        );
    }

    pub fn respond_after(&self, path: &str, delay: Duration, status: u16, body: &str) {
        self.route(
            Method::Get,
            path,
            Route {
                delay: Some(delay),
                result: Ok(ApiResponse::new(status, body)),
            },
        );
    }

    pub fn respond_post(&self, path: &str, status: u16, body: &str) {
        self.route(
            Method::Post,
            path,
            Route {
                delay: None,
                result: Ok(ApiResponse::new(status, body)),
            },
        );
    }

    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.route(
            method,
            path,
            Route {
                delay: None,
                result: Err(error),
            },
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let route = self
            .routes
            .borrow()
            .get(&(request.method, request.path.clone()))
            .cloned();
        match route {
            Some(route) => {
                if let Some(delay) = route.delay {
                    tokio::time::sleep(delay).await;
                }
                route.result
            }
            None => Ok(ApiResponse::new(404, format!("no route for {}", request.path))),
        }
    }
}

/// `next_frame` is a fixed 16ms sleep on the tokio clock.
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    async fn next_frame(&self) {
        tokio::time::sleep(FRAME).await;
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        tokio::task::spawn_local(task);
    }
}

/// Drive `test` inside a `LocalSet` so tasks spawned through
/// [`TokioScheduler`] make progress.
pub async fn local<F: Future>(test: F) -> F::Output {
    tokio::task::LocalSet::new().run_until(test).await
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    ShowLoading(Region, usize),
    HideLoading(Region),
    Clear(Region),
    Actions(usize),
    Targets(Region, usize),
    Collected(usize),
    Failure(Region, String),
    Header(Option<DetailHeader>),
    Visible(Surface, bool),
    Entered(Surface, bool),
    Busy(Surface, bool),
    Toast(String),
    Reveal(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub loading: bool,
    pub skeleton_rows: usize,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub visible: bool,
    pub entered: bool,
}

#[derive(Default)]
struct Recorded {
    events: Vec<RenderEvent>,
    regions: HashMap<Region, RegionSnapshot>,
    surfaces: HashMap<Surface, SurfaceSnapshot>,
    actions: Vec<ActionRow>,
    total: Option<u64>,
    targets: HashMap<Region, Vec<TargetRow>>,
    collected: Vec<ProfileCard>,
    header: Option<DetailHeader>,
    toast: String,
    reveal_batches: Vec<RevealBatch>,
}

/// A document that remembers what was rendered into it.
#[derive(Default)]
pub struct RecordingRender {
    state: RefCell<Recorded>,
}

impl RecordingRender {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.state.borrow().events.clone()
    }

    pub fn region(&self, region: Region) -> RegionSnapshot {
        self.state
            .borrow()
            .regions
            .get(&region)
            .cloned()
            .unwrap_or_default()
    }

    pub fn surface(&self, surface: Surface) -> SurfaceSnapshot {
        self.state
            .borrow()
            .surfaces
            .get(&surface)
            .copied()
            .unwrap_or_default()
    }

    pub fn actions(&self) -> Vec<ActionRow> {
        self.state.borrow().actions.clone()
    }

    pub fn total(&self) -> Option<u64> {
        self.state.borrow().total
    }

    pub fn targets(&self, region: Region) -> Vec<TargetRow> {
        self.state
            .borrow()
            .targets
            .get(&region)
            .cloned()
            .unwrap_or_default()
    }

    pub fn collected(&self) -> Vec<ProfileCard> {
        self.state.borrow().collected.clone()
    }

    pub fn header(&self) -> Option<DetailHeader> {
        self.state.borrow().header.clone()
    }

    pub fn toast(&self) -> String {
        self.state.borrow().toast.clone()
    }

    pub fn reveal_batches(&self) -> Vec<RevealBatch> {
        self.state.borrow().reveal_batches.clone()
    }

    fn record(&self, event: RenderEvent, apply: impl FnOnce(&mut Recorded)) {
        let mut state = self.state.borrow_mut();
        state.events.push(event);
        apply(&mut state);
    }
}

impl RenderTarget for RecordingRender {
    fn show_loading(&self, region: Region, rows: usize) {
        self.record(RenderEvent::ShowLoading(region, rows), |s| {
            let snapshot = s.regions.entry(region).or_default();
            snapshot.loading = true;
            snapshot.skeleton_rows = rows;
        });
    }

    fn hide_loading(&self, region: Region) {
        self.record(RenderEvent::HideLoading(region), |s| {
            s.regions.entry(region).or_default().loading = false;
        });
    }

    fn clear(&self, region: Region) {
        self.record(RenderEvent::Clear(region), |s| {
            s.regions.entry(region).or_default().failure = None;
            match region {
                Region::Actions => s.actions.clear(),
                Region::DetailCollected => s.collected.clear(),
                Region::Targets | Region::DetailTargets => {
                    s.targets.remove(&region);
                }
            }
        });
    }

    fn render_actions(&self, rows: Vec<ActionRow>, total: Option<u64>) {
        self.record(RenderEvent::Actions(rows.len()), |s| {
            s.regions.entry(Region::Actions).or_default().failure = None;
            s.actions = rows;
            s.total = total;
        });
    }

    fn render_targets(&self, region: Region, rows: Vec<TargetRow>) {
        self.record(RenderEvent::Targets(region, rows.len()), |s| {
            s.regions.entry(region).or_default().failure = None;
            s.targets.insert(region, rows);
        });
    }

    fn render_collected(&self, cards: Vec<ProfileCard>) {
        self.record(RenderEvent::Collected(cards.len()), |s| {
            s.regions.entry(Region::DetailCollected).or_default().failure = None;
            s.collected = cards;
        });
    }

    fn render_failure(&self, region: Region, message: String) {
        self.record(RenderEvent::Failure(region, message.clone()), |s| {
            s.regions.entry(region).or_default().failure = Some(message);
            match region {
                Region::Actions => s.actions.clear(),
                Region::DetailCollected => s.collected.clear(),
                Region::Targets | Region::DetailTargets => {
                    s.targets.remove(&region);
                }
            }
        });
    }

    fn render_detail_header(&self, header: Option<DetailHeader>) {
        self.record(RenderEvent::Header(header.clone()), |s| s.header = header);
    }

    fn set_visible(&self, surface: Surface, visible: bool) {
        self.record(RenderEvent::Visible(surface, visible), |s| {
            s.surfaces.entry(surface).or_default().visible = visible;
        });
    }

    fn set_entered(&self, surface: Surface, entered: bool) {
        self.record(RenderEvent::Entered(surface, entered), |s| {
            s.surfaces.entry(surface).or_default().entered = entered;
        });
    }

    fn set_busy(&self, surface: Surface, busy: bool) {
        self.record(RenderEvent::Busy(surface, busy), |_| {});
    }

    fn set_toast(&self, message: String) {
        self.record(RenderEvent::Toast(message.clone()), |s| s.toast = message);
    }

    fn observe_reveal(&self, batch: RevealBatch, _tracker: SharedReveal) {
        self.record(RenderEvent::Reveal(batch.keys.len()), |s| {
            s.reveal_batches.push(batch)
        });
    }
}
