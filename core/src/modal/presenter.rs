//! Modal open/close lifecycle.
//!
//! `Closed -> Open -> Closing -> Closed`. The closing phase covers the fade
//! out; the host removes the overlay when the fade timer calls
//! [`ModalPresenter::finish_close`]. While a modal is open or closing, new
//! opens are rejected.

use crate::error::ModalError;

use super::{ProjectCard, ProjectDetail};

/// How the user asked to close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open(ProjectDetail),
    Closing(ProjectDetail),
}

#[derive(Debug, Clone, Default)]
pub struct ModalPresenter {
    phase: ModalPhase,
    /// Bumped on every open so a stale fade timer cannot close a later modal
    generation: u32,
}

impl ModalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for a clicked card. Returns the open generation.
    pub fn open(&mut self, card: &ProjectCard) -> Result<u32, ModalError> {
        if !matches!(self.phase, ModalPhase::Closed) {
            tracing::debug!(title = %card.title, "modal already open, ignoring");
            return Err(ModalError::AlreadyOpen);
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = ModalPhase::Open(ProjectDetail::for_card(card));
        Ok(self.generation)
    }

    /// Start the fade out. Returns the generation the fade timer must pass
    /// to [`ModalPresenter::finish_close`].
    pub fn begin_close(&mut self, reason: CloseReason) -> Result<u32, ModalError> {
        match std::mem::take(&mut self.phase) {
            ModalPhase::Open(detail) => {
                tracing::debug!(?reason, title = %detail.title, "closing project modal");
                self.phase = ModalPhase::Closing(detail);
                Ok(self.generation)
            }
            other => {
                self.phase = other;
                Err(ModalError::NotOpen)
            }
        }
    }

    /// Remove the overlay once the fade has finished.
    pub fn finish_close(&mut self, generation: u32) -> bool {
        if generation == self.generation && matches!(self.phase, ModalPhase::Closing(_)) {
            self.phase = ModalPhase::Closed;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    pub fn detail(&self) -> Option<&ProjectDetail> {
        match &self.phase {
            ModalPhase::Open(d) | ModalPhase::Closing(d) => Some(d),
            ModalPhase::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open(_))
    }

    /// Page scroll is locked for as long as an overlay is in the DOM.
    pub fn scroll_locked(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }
}
