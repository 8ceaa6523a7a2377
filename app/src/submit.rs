//! Simulated contact-form delivery.
//!
//! The site has no backend. This submitter is a mock boundary: it waits a
//! fixed delay so the sending state is visible, then reports success without
//! sending anything. Wiring a real endpoint means replacing this type with
//! another [`Submitter`] implementation.

use folio_core::SubmitError;
use folio_core::form::{ContactMessage, Submitter};
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        tracing::info!(
            subject = %message.subject,
            "simulated submit, no message leaves the browser"
        );
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
