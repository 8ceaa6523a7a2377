//! Controllers behind the portfolio page's interactivity.
//!
//! Nothing in this crate touches the browser. The frontend measures the
//! document (element keys and offsets, intersection ratios, scroll metrics,
//! pointer positions), hands the numbers to these controllers, and applies
//! the classes and [`StylePatch`](folio_types::StylePatch)es they return.

pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod interaction;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod reveal;

pub use error::{ConfigError, ModalError, SubmitError};
pub use form::{ContactForm, Submitter};
pub use modal::{ModalPresenter, ProjectCard, ProjectDetail};
pub use notify::{NotificationKind, NotificationSlot};
pub use reveal::{ElementKey, RevealPipeline};
