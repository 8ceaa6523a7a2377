//! Error types crossing controller boundaries.

use thiserror::Error;

/// Errors loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error in site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reported by a [`Submitter`](crate::form::Submitter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("message could not be delivered: {0}")]
    Delivery(String),
}

/// Errors from the project modal presenter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("a project modal is already open")]
    AlreadyOpen,
    #[error("no project modal is open")]
    NotOpen,
}
