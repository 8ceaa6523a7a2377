//! Shared types for the folio frontend.
//!
//! Plain data with no browser dependencies: the animation intent contract,
//! site configuration, and inline style patches.

pub mod config;
pub mod intent;
pub mod style;

pub use config::{
    EffectsConfig, FormConfig, ModalConfig, NavConfig, NotificationConfig, RevealConfig,
    SiteConfig,
};
pub use intent::{
    AnimationIntent, REVEAL_KEY_ATTR, REVEAL_SETTLED_ATTR, REVEALED_CLASS, SETTLED_TRANSFORM,
};
pub use style::StylePatch;
