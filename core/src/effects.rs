//! Cosmetic effects: scroll progress, hero parallax, cursor follower,
//! particle field.
//!
//! All pure math over numbers the host measures. Every effect is skipped
//! when the visitor prefers reduced motion.

use folio_types::style::{percent, px, seconds, translate, translate_y};
use folio_types::{EffectsConfig, StylePatch};

/// Media query the host evaluates with `matchMedia`.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Scroll position as a percentage of the scrollable range, clamped to
/// `[0, 100]`. A page that does not scroll reports 0.
///
/// ```
/// use folio_core::effects::scroll_progress;
/// assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
/// assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
/// ```
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

pub fn progress_style(progress: f64) -> StylePatch {
    StylePatch::new().set("width", percent(progress))
}

/// Hero parallax translation. `None` once the hero has scrolled out of
/// view, where updating it would be wasted work.
pub fn parallax_offset(scroll_y: f64, hero_height: f64, speed: f64) -> Option<f64> {
    (scroll_y >= 0.0 && scroll_y < hero_height).then_some(scroll_y * speed)
}

pub fn parallax_style(offset: f64) -> StylePatch {
    StylePatch::new().set("transform", translate_y(offset))
}

/// Custom cursor: a dot pinned to the pointer and an outline easing after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    ease: f64,
    pub target: (f64, f64),
    pub outline: (f64, f64),
    pub hovering: bool,
    pub visible: bool,
}

impl CursorFollower {
    pub fn new(ease: f64) -> Self {
        Self {
            ease: ease.clamp(0.0, 1.0),
            target: (0.0, 0.0),
            outline: (0.0, 0.0),
            hovering: false,
            visible: false,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.visible {
            // first sighting: no easing in from the corner
            self.outline = (x, y);
            self.visible = true;
        }
        self.target = (x, y);
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    /// Advance the outline one frame. Returns false once it has caught up.
    pub fn step(&mut self) -> bool {
        let dx = self.target.0 - self.outline.0;
        let dy = self.target.1 - self.outline.1;
        if dx.abs() < 0.1 && dy.abs() < 0.1 {
            self.outline = self.target;
            return false;
        }
        self.outline.0 += dx * self.ease;
        self.outline.1 += dy * self.ease;
        true
    }

    pub fn dot_style(&self) -> StylePatch {
        StylePatch::new()
            .set("transform", translate(self.target.0, self.target.1))
            .set("opacity", if self.visible { "1" } else { "0" })
    }

    pub fn outline_style(&self) -> StylePatch {
        let scale = if self.hovering { 1.5 } else { 1.0 };
        StylePatch::new()
            .set(
                "transform",
                format!(
                    "{} scale({scale})",
                    translate(self.outline.0, self.outline.1)
                ),
            )
            .set("opacity", if self.visible { "1" } else { "0" })
    }
}

/// One floating particle in the hero background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of container width
    pub left: f64,
    /// Diameter in pixels
    pub size: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn style(&self) -> StylePatch {
        StylePatch::new()
            .set("left", percent(self.left))
            .set("width", px(self.size))
            .set("height", px(self.size))
            .set("animation-duration", seconds(self.duration_s))
            .set("animation-delay", seconds(self.delay_s))
    }
}

/// Generate the particle field. `unit` yields uniform values in `[0, 1)`.
pub fn particle_field(config: &EffectsConfig, mut unit: impl FnMut() -> f64) -> Vec<Particle> {
    let mut sample = |lo: f64, hi: f64| lo + unit().clamp(0.0, 1.0) * (hi - lo);
    (0..config.particle_count)
        .map(|_| Particle {
            left: sample(0.0, 100.0),
            size: sample(1.0, 4.0),
            duration_s: sample(10.0, 30.0),
            delay_s: sample(0.0, 10.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_clamps() {
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(250.0, 2000.0, 1000.0), 25.0);
        assert_eq!(progress_style(25.0).to_inline(), "width: 25%;");
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(200.0, 900.0, 0.5), Some(100.0));
        assert_eq!(parallax_offset(900.0, 900.0, 0.5), None);
        assert_eq!(
            parallax_style(100.0).get("transform"),
            Some("translateY(100px)")
        );
    }

    #[test]
    fn test_cursor_eases_toward_pointer() {
        let mut cursor = CursorFollower::new(0.5);
        cursor.pointer_moved(100.0, 100.0);
        assert_eq!(cursor.outline, (100.0, 100.0));

        cursor.pointer_moved(200.0, 100.0);
        assert!(cursor.step());
        assert_eq!(cursor.outline, (150.0, 100.0));
        assert!(cursor.step());
        assert_eq!(cursor.outline, (175.0, 100.0));

        let mut frames = 0;
        while cursor.step() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(cursor.outline, (200.0, 100.0));
    }

    #[test]
    fn test_cursor_styles() {
        let mut cursor = CursorFollower::new(0.15);
        assert_eq!(cursor.dot_style().get("opacity"), Some("0"));
        cursor.pointer_moved(10.0, 20.0);
        cursor.hovering = true;
        assert_eq!(
            cursor.dot_style().get("transform"),
            Some("translate(10px, 20px)")
        );
        assert_eq!(
            cursor.outline_style().get("transform"),
            Some("translate(10px, 20px) scale(1.5)")
        );
        cursor.pointer_left();
        assert_eq!(cursor.outline_style().get("opacity"), Some("0"));
    }

    #[test]
    fn test_particle_field_ranges() {
        let config = EffectsConfig::default();
        let mut seed = 0.0_f64;
        let particles = particle_field(&config, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..=100.0).contains(&p.left));
            assert!((1.0..=4.0).contains(&p.size));
            assert!((10.0..=30.0).contains(&p.duration_s));
            assert!((0.0..=10.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            left: 50.0,
            size: 2.0,
            duration_s: 12.0,
            delay_s: 0.5,
        };
        assert_eq!(
            p.style().to_inline(),
            "left: 50%; width: 2px; height: 2px; animation-duration: 12.00s; animation-delay: 0.50s;"
        );
    }
}
