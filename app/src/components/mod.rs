//! UI Components
//!
//! Page sections and the overlays layered on top of them.

pub mod contact_form;
pub mod effects;
pub mod nav_bar;
pub mod project_modal;
pub mod sections;
pub mod toast;

pub use contact_form::ContactSection;
pub use effects::{CustomCursor, ScrollProgress};
pub use nav_bar::NavBar;
pub use project_modal::{ProjectModal, use_project_modal_provider};
pub use sections::{Hero, Projects, Skills};
pub use toast::{ToastFrame, use_toast_provider};
