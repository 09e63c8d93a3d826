//! Signal-backed document state.
//!
//! [`ViewState`] is the set of signals the Leptos components read;
//! [`BrowserRender`] is the [`RenderTarget`] the controllers write through.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::controllers::reveal::{RevealBatch, REVEAL_THRESHOLD};
use crate::render::{
    ActionRow, DetailHeader, ProfileCard, Region, RenderTarget, SharedReveal, Surface, TargetRow,
};

/// Attribute carrying a reveal-tagged element's key.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

#[derive(Clone, Copy)]
pub struct RegionSignals {
    pub loading: RwSignal<bool>,
    pub skeleton_rows: RwSignal<usize>,
    pub failure: RwSignal<Option<String>>,
}

impl RegionSignals {
    fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            skeleton_rows: RwSignal::new(0),
            failure: RwSignal::new(None),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SurfaceSignals {
    pub visible: RwSignal<bool>,
    pub entered: RwSignal<bool>,
    pub busy: RwSignal<bool>,
}

impl SurfaceSignals {
    fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            entered: RwSignal::new(false),
            busy: RwSignal::new(false),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewState {
    actions_region: RegionSignals,
    targets_region: RegionSignals,
    detail_targets_region: RegionSignals,
    detail_collected_region: RegionSignals,
    detail: SurfaceSignals,
    create: SurfaceSignals,
    toast_surface: SurfaceSignals,
    pub actions: RwSignal<Vec<ActionRow>>,
    pub total: RwSignal<Option<u64>>,
    pub targets: RwSignal<Vec<TargetRow>>,
    pub detail_targets: RwSignal<Vec<TargetRow>>,
    pub collected: RwSignal<Vec<ProfileCard>>,
    pub header: RwSignal<Option<DetailHeader>>,
    pub toast: RwSignal<String>,
    pub revealed: RwSignal<HashSet<String>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            actions_region: RegionSignals::new(),
            targets_region: RegionSignals::new(),
            detail_targets_region: RegionSignals::new(),
            detail_collected_region: RegionSignals::new(),
            detail: SurfaceSignals::new(),
            create: SurfaceSignals::new(),
            toast_surface: SurfaceSignals::new(),
            actions: RwSignal::new(Vec::new()),
            total: RwSignal::new(None),
            targets: RwSignal::new(Vec::new()),
            detail_targets: RwSignal::new(Vec::new()),
            collected: RwSignal::new(Vec::new()),
            header: RwSignal::new(None),
            toast: RwSignal::new(String::new()),
            revealed: RwSignal::new(HashSet::new()),
        }
    }

    pub fn region(&self, region: Region) -> RegionSignals {
        match region {
            Region::Actions => self.actions_region,
            Region::Targets => self.targets_region,
            Region::DetailTargets => self.detail_targets_region,
            Region::DetailCollected => self.detail_collected_region,
        }
    }

    pub fn surface(&self, surface: Surface) -> SurfaceSignals {
        match surface {
            Surface::Detail => self.detail,
            Surface::Create => self.create,
            Surface::Toast => self.toast_surface,
        }
    }

    fn target_rows(&self, region: Region) -> Option<RwSignal<Vec<TargetRow>>> {
        match region {
            Region::Targets => Some(self.targets),
            Region::DetailTargets => Some(self.detail_targets),
            _ => None,
        }
    }

    fn clear_content(&self, region: Region) {
        match region {
            Region::Actions => {
                self.actions.set(Vec::new());
                self.total.set(None);
            }
            Region::Targets => self.targets.set(Vec::new()),
            Region::DetailTargets => self.detail_targets.set(Vec::new()),
            Region::DetailCollected => self.collected.set(Vec::new()),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// One reveal pass. Dropping it disconnects the observer.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct BrowserRender {
    view: ViewState,
    reveal: RefCell<Option<RevealObserver>>,
    reveal_generation: Cell<u64>,
}

impl BrowserRender {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            reveal: RefCell::new(None),
            reveal_generation: Cell::new(0),
        }
    }
}

impl RenderTarget for BrowserRender {
    fn show_loading(&self, region: Region, rows: usize) {
        let signals = self.view.region(region);
        signals.skeleton_rows.set(rows);
        signals.loading.set(true);
    }

    fn hide_loading(&self, region: Region) {
        self.view.region(region).loading.set(false);
    }

    fn clear(&self, region: Region) {
        self.view.region(region).failure.set(None);
        self.view.clear_content(region);
    }

    fn render_actions(&self, rows: Vec<ActionRow>, total: Option<u64>) {
        self.view.actions_region.failure.set(None);
        self.view.actions.set(rows);
        self.view.total.set(total);
    }

    fn render_targets(&self, region: Region, rows: Vec<TargetRow>) {
        let Some(signal) = self.view.target_rows(region) else {
            tracing::warn!(?region, "region does not hold targets");
            return;
        };
        self.view.region(region).failure.set(None);
        signal.set(rows);
    }

    fn render_collected(&self, cards: Vec<ProfileCard>) {
        self.view.detail_collected_region.failure.set(None);
        self.view.collected.set(cards);
    }

    fn render_failure(&self, region: Region, message: String) {
        self.view.clear_content(region);
        self.view.region(region).failure.set(Some(message));
    }

    fn render_detail_header(&self, header: Option<DetailHeader>) {
        self.view.header.set(header);
    }

    fn set_visible(&self, surface: Surface, visible: bool) {
        self.view.surface(surface).visible.set(visible);
    }

    fn set_entered(&self, surface: Surface, entered: bool) {
        self.view.surface(surface).entered.set(entered);
    }

    fn set_busy(&self, surface: Surface, busy: bool) {
        self.view.surface(surface).busy.set(busy);
    }

    fn set_toast(&self, message: String) {
        self.view.toast.set(message);
    }

    fn observe_reveal(&self, batch: RevealBatch, tracker: SharedReveal) {
        // The previous batch's elements are gone; stop watching them.
        self.reveal.borrow_mut().take();

        let revealed = self.view.revealed;
        if self.reveal_generation.replace(batch.generation) != batch.generation {
            revealed.set(HashSet::new());
        }
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(key) = target.get_attribute(REVEAL_KEY_ATTR) else {
                        continue;
                    };
                    if tracker
                        .borrow_mut()
                        .intersect(&key, entry.intersection_ratio())
                    {
                        revealed.update(|keys| {
                            keys.insert(key);
                        });
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!(error = ?e, "IntersectionObserver unavailable");
                return;
            }
        };

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let mut watched = 0;
        for key in &batch.keys {
            let selector = format!("[{}=\"{}\"]", REVEAL_KEY_ATTR, key);
            if let Ok(Some(element)) = document.query_selector(&selector) {
                observer.observe(&element);
                watched += 1;
            }
        }
        tracing::debug!(generation = batch.generation, watched, "reveal pass");

        *self.reveal.borrow_mut() = Some(RevealObserver {
            observer,
            _callback: callback,
        });
    }
}
