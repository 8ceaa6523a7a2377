//! Contact submission boundary.
//!
//! There is no backend. The page ships with a simulated submitter that
//! waits and reports success; a real integration implements [`Submitter`]
//! and nothing else changes.

use std::future::Future;

use serde::Serialize;

use crate::error::SubmitError;

/// Payload handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivers a contact message somewhere.
pub trait Submitter {
    fn submit(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Run a submitter and log the outcome.
pub async fn deliver<S: Submitter>(
    submitter: &S,
    message: &ContactMessage,
) -> Result<(), SubmitError> {
    tracing::debug!(email = %message.email, "submitting contact message");
    let result = submitter.submit(message).await;
    match &result {
        Ok(()) => tracing::info!("contact message delivered"),
        Err(e) => tracing::error!(error = %e, "contact message failed"),
    }
    result
}
