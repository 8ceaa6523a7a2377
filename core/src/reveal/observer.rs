//! Visibility observation registry.
//!
//! Keeps one entry per trackable element key. The host feeds it sweep
//! results and raw intersection ratios; it answers with one-shot
//! [`Entered`] notifications.

use folio_types::AnimationIntent;
use hashbrown::HashMap;

use super::{Candidate, ElementKey, Entered};

/// Browsers report ratios at a crossing slightly under the requested
/// threshold.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone)]
struct Observed {
    intent: AnimationIntent,
    offset_top: f64,
    entered: bool,
}

/// Registry of trackable elements and their first-entry flags.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    elements: HashMap<ElementKey, Observed>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            elements: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register sweep results. Returns keys seen for the first time, in
    /// sweep order; these are the ones the host must start observing.
    ///
    /// Keys already known are not re-registered. Their offset is refreshed
    /// while they are still waiting to enter, since a resize may have moved
    /// them.
    pub fn register(&mut self, candidates: impl IntoIterator<Item = Candidate>) -> Vec<ElementKey> {
        let mut fresh = Vec::new();
        for c in candidates {
            match self.elements.get_mut(&c.key) {
                Some(existing) => {
                    if !existing.entered {
                        existing.offset_top = c.offset_top;
                    }
                }
                None => {
                    self.elements.insert(
                        c.key,
                        Observed {
                            intent: c.intent,
                            offset_top: c.offset_top,
                            entered: false,
                        },
                    );
                    fresh.push(c.key);
                }
            }
        }
        if !fresh.is_empty() {
            tracing::debug!(
                count = fresh.len(),
                total = self.elements.len(),
                "registered trackable elements"
            );
        }
        fresh
    }

    /// Report an intersection ratio for `key`.
    ///
    /// Returns `Some` exactly once per key: the first time the ratio is
    /// non-zero and meets the threshold. Unknown keys are ignored.
    pub fn notify(&mut self, key: ElementKey, ratio: f64) -> Option<Entered> {
        let threshold = self.threshold;
        let observed = self.elements.get_mut(&key)?;
        if observed.entered || ratio <= 0.0 || ratio + RATIO_EPSILON < threshold {
            return None;
        }
        observed.entered = true;
        Some(Entered {
            key,
            intent: observed.intent,
            offset_top: observed.offset_top,
        })
    }

    /// Enter every registered element that has not entered yet.
    ///
    /// Used when the host has no intersection primitive: everything reveals
    /// immediately instead of waiting to scroll into view.
    pub fn enter_all_pending(&mut self) -> Vec<Entered> {
        let mut entered: Vec<Entered> = self
            .elements
            .iter_mut()
            .filter(|(_, o)| !o.entered)
            .map(|(key, o)| {
                o.entered = true;
                Entered {
                    key: *key,
                    intent: o.intent,
                    offset_top: o.offset_top,
                }
            })
            .collect();
        entered.sort_by_key(|e| e.key);
        entered
    }

    pub fn is_registered(&self, key: ElementKey) -> bool {
        self.elements.contains_key(&key)
    }

    pub fn has_entered(&self, key: ElementKey) -> bool {
        self.elements.get(&key).is_some_and(|o| o.entered)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
