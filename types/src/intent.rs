//! Animation intents and the class names that form the styling contract.
//!
//! The stylesheet keys its initial (hidden) state off one of the intent
//! classes and its final state off [`REVEALED_CLASS`]. Renaming any of these
//! breaks the page, so they live here as the single source of truth.

use serde::{Deserialize, Serialize};

/// Class applied once an element has been revealed. Never removed.
pub const REVEALED_CLASS: &str = "revealed";

/// Data attribute stamped on a trackable element the first time a sweep sees it.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Data attribute marking an element whose directional transform was settled.
pub const REVEAL_SETTLED_ATTR: &str = "data-reveal-settled";

/// Inline transform a directional element keeps once settled.
pub const SETTLED_TRANSFORM: &str = "none";

/// How a trackable element enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationIntent {
    FadeUp,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
    FadeIn,
}

impl AnimationIntent {
    pub const ALL: [AnimationIntent; 6] = [
        AnimationIntent::FadeUp,
        AnimationIntent::SlideUp,
        AnimationIntent::SlideLeft,
        AnimationIntent::SlideRight,
        AnimationIntent::ZoomIn,
        AnimationIntent::FadeIn,
    ];

    /// CSS class carrying this intent.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::SlideUp => "slide-up",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::ZoomIn => "zoom-in",
            Self::FadeIn => "fade-in",
        }
    }

    /// Parse a single class token.
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.class_name() == class)
    }

    /// First intent found in a whitespace separated class list.
    ///
    /// ```
    /// use folio_types::AnimationIntent;
    /// assert_eq!(
    ///     AnimationIntent::from_class_list("card slide-left wide"),
    ///     Some(AnimationIntent::SlideLeft)
    /// );
    /// assert_eq!(AnimationIntent::from_class_list("card"), None);
    /// ```
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(Self::from_class)
    }

    /// Intents whose hidden state is a translation that must be settled
    /// back to neutral after the reveal transition.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Self::FadeUp | Self::SlideUp | Self::SlideLeft | Self::SlideRight
        )
    }

    /// Comma separated selector matching every trackable element.
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|i| format!(".{}", i.class_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
