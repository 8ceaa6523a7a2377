//! Site configuration.
//!
//! Every timing constant and threshold the controllers use. Each section
//! defaults independently so a partial `site.toml` only overrides what it
//! names.

use serde::{Deserialize, Serialize};

/// Top-level configuration, one table per component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub form: FormConfig,
    pub notifications: NotificationConfig,
    pub modal: ModalConfig,
    pub nav: NavConfig,
    pub effects: EffectsConfig,
}

/// Visibility observation and reveal staggering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element box that must be visible (0.0 - 1.0)
    pub threshold: f64,
    /// Offsets are reduced modulo this before scaling
    pub stagger_modulo: f64,
    /// Milliseconds of delay per pixel of reduced offset
    pub stagger_factor: f64,
    /// Delay after reveal before directional transforms settle
    pub settle_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            stagger_modulo: 300.0,
            stagger_factor: 0.1,
            settle_ms: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated network delay for the contact form
    pub submit_delay_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: u32,
    pub slide_out_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 5000,
            slide_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub fade_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { fade_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which the navbar switches to its compact style
    pub scrolled_threshold: f64,
    /// Lead applied when deciding which section is active
    pub section_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            section_offset: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub parallax_speed: f64,
    /// Fraction of the remaining distance the cursor outline covers per frame
    pub cursor_ease: f64,
    pub particle_count: usize,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_speed: 0.5,
            cursor_ease: 0.15,
            particle_count: 50,
        }
    }
}
