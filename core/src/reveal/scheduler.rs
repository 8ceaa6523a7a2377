//! Reveal scheduling.
//!
//! Turns an [`Entered`] notification into a [`RevealPlan`] and tracks the
//! one-way `Entered -> Revealed -> Settled` progression per element.

use folio_types::RevealConfig;
use hashbrown::HashMap;

use super::{ElementKey, Entered, RevealState};

/// Timing for one element's reveal, relative to the moment it entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPlan {
    pub key: ElementKey,
    /// Wait before applying the revealed class
    pub delay_ms: f64,
    /// Wait after the reveal before settling the transform to neutral.
    /// `None` for non-directional intents.
    pub settle_after_ms: Option<u32>,
}

/// Position-derived stagger: `(offset mod modulo) * factor` milliseconds.
///
/// Uses a Euclidean remainder so elements above the document origin still
/// get a non-negative delay.
///
/// # Examples
/// ```
/// use folio_core::reveal::stagger_delay;
/// assert_eq!(stagger_delay(350.0, 300.0, 0.1), 5.0);
/// assert_eq!(stagger_delay(1000.0, 300.0, 0.1), 10.0);
/// ```
pub fn stagger_delay(offset_top: f64, modulo: f64, factor: f64) -> f64 {
    if modulo <= 0.0 || !offset_top.is_finite() {
        return 0.0;
    }
    let delay = offset_top.rem_euclid(modulo) * factor;
    // keep 350 -> 5.0 exact rather than 5.000000000000001
    (delay * 1e6).round() / 1e6
}

#[derive(Debug, Clone)]
pub struct RevealScheduler {
    config: RevealConfig,
    reduced_motion: bool,
    states: HashMap<ElementKey, RevealState>,
}

impl RevealScheduler {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            reduced_motion: false,
            states: HashMap::new(),
        }
    }

    /// With reduced motion every element reveals without stagger.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Plan the reveal of a newly entered element.
    pub fn plan(&mut self, entered: &Entered) -> RevealPlan {
        self.states.entry(entered.key).or_insert(RevealState::Entered);

        let delay_ms = if self.reduced_motion {
            0.0
        } else {
            stagger_delay(
                entered.offset_top,
                self.config.stagger_modulo,
                self.config.stagger_factor,
            )
        };
        let settle_after_ms = entered
            .intent
            .is_directional()
            .then_some(self.config.settle_ms);

        RevealPlan {
            key: entered.key,
            delay_ms,
            settle_after_ms,
        }
    }

    /// Plan an entered element with no stagger, for hosts that cannot
    /// observe visibility and reveal everything at once.
    pub fn plan_immediate(&mut self, entered: &Entered) -> RevealPlan {
        RevealPlan {
            delay_ms: 0.0,
            ..self.plan(entered)
        }
    }

    /// Record that the revealed class was applied.
    ///
    /// Returns `true` only on the first call for a planned key; the host
    /// applies the class only then.
    pub fn mark_revealed(&mut self, key: ElementKey) -> bool {
        match self.states.get_mut(&key) {
            Some(state) if *state == RevealState::Entered => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Record that the directional transform was settled.
    pub fn mark_settled(&mut self, key: ElementKey) -> bool {
        match self.states.get_mut(&key) {
            Some(state) if *state == RevealState::Revealed => {
                *state = RevealState::Settled;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, key: ElementKey) -> RevealState {
        self.states
            .get(&key)
            .copied()
            .unwrap_or(RevealState::Registered)
    }

    pub fn revealed_count(&self) -> usize {
        self.states.values().filter(|s| s.is_revealed()).count()
    }
}
