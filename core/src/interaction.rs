//! Hover and focus micro-interactions.
//!
//! Stateless: each function looks only at the surface it is given and
//! returns the inline style to apply to that element. Leaving or blurring
//! returns a patch of empty values, which clears the inline overrides and
//! lets the stylesheet take over again. The one exception is a card whose
//! reveal transform has settled: it goes back to the settled transform.

use folio_types::{SETTLED_TRANSFORM, StylePatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Skill,
    Project,
}

impl CardKind {
    /// Selector used to find the card from a nested hover target.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Skill => ".skill-card",
            Self::Project => ".project-card",
        }
    }
}

/// Something that reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Button(ButtonVariant),
    Card(CardKind),
}

impl Surface {
    /// Classify from a class list, parsed once when the handler is bound.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        let has = |name: &str| classes.split_whitespace().any(|c| c == name);
        if has("btn") {
            return Some(if has("btn-primary") {
                Self::Button(ButtonVariant::Primary)
            } else {
                Self::Button(ButtonVariant::Secondary)
            });
        }
        if has("skill-card") {
            return Some(Self::Card(CardKind::Skill));
        }
        if has("project-card") {
            return Some(Self::Card(CardKind::Project));
        }
        None
    }

    fn shadow(self) -> &'static str {
        match self {
            Self::Button(ButtonVariant::Primary) => "0 10px 30px rgba(99, 102, 241, 0.4)",
            Self::Button(ButtonVariant::Secondary) => "0 10px 30px rgba(236, 72, 153, 0.3)",
            Self::Card(CardKind::Skill) => "0 20px 40px rgba(99, 102, 241, 0.25)",
            Self::Card(CardKind::Project) => "0 25px 50px rgba(0, 0, 0, 0.35)",
        }
    }

    fn lift(self) -> &'static str {
        match self {
            Self::Button(_) => "translateY(-3px)",
            Self::Card(CardKind::Skill) => "translateY(-10px)",
            Self::Card(CardKind::Project) => "translateY(-10px) scale(1.02)",
        }
    }
}

/// Style for the pointer entering (`true`) or leaving (`false`) a surface.
///
/// `settled` is whether the element's reveal transform was already settled.
pub fn hover_style(surface: Surface, hovered: bool, settled: bool) -> StylePatch {
    if hovered {
        StylePatch::new()
            .set("transform", surface.lift())
            .set("box-shadow", surface.shadow())
    } else {
        let rest = if settled { SETTLED_TRANSFORM } else { "" };
        StylePatch::new().set("transform", rest).set("box-shadow", "")
    }
}

/// Emphasis applied to a focused form field and its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusStyle {
    pub field: StylePatch,
    pub container: StylePatch,
}

pub fn focus_style(focused: bool) -> FocusStyle {
    if focused {
        FocusStyle {
            field: StylePatch::new()
                .set("border-color", "#6366f1")
                .set("box-shadow", "0 0 0 3px rgba(99, 102, 241, 0.2)"),
            container: StylePatch::new().set("transform", "scale(1.02)"),
        }
    } else {
        FocusStyle {
            field: StylePatch::new().set("border-color", "").set("box-shadow", ""),
            container: StylePatch::new().set("transform", ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_from_class_list() {
        assert_eq!(
            Surface::from_class_list("btn btn-primary"),
            Some(Surface::Button(ButtonVariant::Primary))
        );
        assert_eq!(
            Surface::from_class_list("btn btn-secondary large"),
            Some(Surface::Button(ButtonVariant::Secondary))
        );
        assert_eq!(
            Surface::from_class_list("skill-card fade-up"),
            Some(Surface::Card(CardKind::Skill))
        );
        assert_eq!(
            Surface::from_class_list("project-card"),
            Some(Surface::Card(CardKind::Project))
        );
        assert_eq!(Surface::from_class_list("nav-link"), None);
    }

    #[test]
    fn test_hover_tints_differ_by_variant() {
        let primary = hover_style(Surface::Button(ButtonVariant::Primary), true, false);
        let secondary = hover_style(Surface::Button(ButtonVariant::Secondary), true, false);
        assert_ne!(primary.get("box-shadow"), secondary.get("box-shadow"));
        assert_eq!(primary.get("transform"), Some("translateY(-3px)"));
    }

    #[test]
    fn test_hover_leave_reverts() {
        let surface = Surface::Card(CardKind::Project);
        let leave = hover_style(surface, false, false);
        assert_eq!(leave.get("transform"), Some(""));
        assert_eq!(leave.get("box-shadow"), Some(""));
        assert_eq!(leave.to_inline(), "");
    }

    #[test]
    fn test_hover_leave_restores_settled_transform() {
        let surface = Surface::Card(CardKind::Skill);
        assert_eq!(
            hover_style(surface, true, true).get("transform"),
            Some("translateY(-10px)")
        );

        let leave = hover_style(surface, false, true);
        assert_eq!(leave.get("transform"), Some("none"));
        assert_eq!(leave.get("box-shadow"), Some(""));
        assert_eq!(leave.to_inline(), "transform: none;");
    }

    #[test]
    fn test_focus_and_blur() {
        let focus = focus_style(true);
        assert_eq!(focus.field.get("border-color"), Some("#6366f1"));
        assert_eq!(focus.container.get("transform"), Some("scale(1.02)"));

        let blur = focus_style(false);
        assert!(blur.field.to_inline().is_empty());
        assert!(blur.container.to_inline().is_empty());
    }

    #[test]
    fn test_card_selectors() {
        assert_eq!(CardKind::Skill.selector(), ".skill-card");
        assert_eq!(CardKind::Project.selector(), ".project-card");
    }
}
