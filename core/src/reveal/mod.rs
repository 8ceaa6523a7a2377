//! Scroll-triggered reveal animations.
//!
//! The host (the web frontend) sweeps the document for elements carrying an
//! [`AnimationIntent`] class, stamps each with a stable [`ElementKey`], and
//! reports intersection ratios. [`RevealPipeline`] answers with
//! [`RevealPlan`]s: how long to wait before adding the revealed class and
//! whether to settle the transform afterwards.
//!
//! Every element reveals at most once. Nothing here is cancellable.

mod observer;
mod scheduler;

#[cfg(test)]
mod reveal_tests;

use folio_types::{AnimationIntent, RevealConfig};

pub use observer::VisibilityObserver;
pub use scheduler::{RevealPlan, RevealScheduler, stagger_delay};

/// Stable identity of a trackable element, stamped into the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(pub u32);

impl ElementKey {
    pub fn parse(attr: &str) -> Option<Self> {
        attr.trim().parse().ok().map(Self)
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out element keys. One allocator per page.
#[derive(Debug, Clone, Default)]
pub struct KeyAllocator {
    next: u32,
}

impl KeyAllocator {
    pub fn next_key(&mut self) -> ElementKey {
        let key = ElementKey(self.next);
        self.next += 1;
        key
    }
}

/// An element found by a selector sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub key: ElementKey,
    pub intent: AnimationIntent,
    /// Distance from the top of the document in CSS pixels
    pub offset_top: f64,
}

/// First-entry notification from the [`VisibilityObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entered {
    pub key: ElementKey,
    pub intent: AnimationIntent,
    pub offset_top: f64,
}

/// Lifecycle of a trackable element. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealState {
    Registered,
    Entered,
    Revealed,
    Settled,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed | Self::Settled)
    }
}

/// Observer and scheduler wired together.
#[derive(Debug, Clone)]
pub struct RevealPipeline {
    observer: VisibilityObserver,
    scheduler: RevealScheduler,
}

impl RevealPipeline {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            observer: VisibilityObserver::new(config.threshold),
            scheduler: RevealScheduler::new(config),
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.scheduler.set_reduced_motion(reduced);
    }

    pub fn threshold(&self) -> f64 {
        self.observer.threshold()
    }

    /// Register a sweep. Returns the keys the host should start observing.
    pub fn sweep(&mut self, candidates: impl IntoIterator<Item = Candidate>) -> Vec<ElementKey> {
        self.observer.register(candidates)
    }

    /// Feed an intersection ratio. Returns a plan the first time the
    /// element crosses the threshold.
    pub fn on_intersection(&mut self, key: ElementKey, ratio: f64) -> Option<RevealPlan> {
        let entered = self.observer.notify(key, ratio)?;
        Some(self.scheduler.plan(&entered))
    }

    /// Unstaggered plans for every pending element, for hosts without an
    /// intersection primitive.
    pub fn reveal_all_pending(&mut self) -> Vec<RevealPlan> {
        let entered = self.observer.enter_all_pending();
        if !entered.is_empty() {
            tracing::warn!(
                count = entered.len(),
                "no visibility observation available, revealing immediately"
            );
        }
        entered
            .iter()
            .map(|e| self.scheduler.plan_immediate(e))
            .collect()
    }

    /// Only elements that actually entered the viewport can be revealed.
    pub fn mark_revealed(&mut self, key: ElementKey) -> bool {
        self.observer.has_entered(key) && self.scheduler.mark_revealed(key)
    }

    pub fn mark_settled(&mut self, key: ElementKey) -> bool {
        self.scheduler.mark_settled(key)
    }

    pub fn state(&self, key: ElementKey) -> Option<RevealState> {
        if !self.observer.is_registered(key) {
            return None;
        }
        Some(self.scheduler.state(key))
    }

    pub fn registered(&self) -> usize {
        self.observer.len()
    }

    pub fn revealed(&self) -> usize {
        self.scheduler.revealed_count()
    }
}
