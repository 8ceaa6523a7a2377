//! Navigation bar state: mobile menu, compact-on-scroll, active section.

use folio_types::NavConfig;

/// A page section as measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default)]
pub struct NavState {
    config: NavConfig,
    menu_open: bool,
    scrolled: bool,
    active: Option<String>,
}

impl NavState {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Nav link clicked: the mobile menu always closes.
    pub fn link_clicked(&mut self) {
        self.menu_open = false;
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Update from a scroll event. Returns true when anything changed.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let scrolled = scroll_y > self.config.scrolled_threshold;
        let active = active_section(sections, scroll_y, self.config.section_offset)
            .map(str::to_string);
        let changed = scrolled != self.scrolled || active != self.active;
        self.scrolled = scrolled;
        self.active = active;
        changed
    }

    /// Class list for the nav menu element.
    pub fn menu_class(&self) -> &'static str {
        if self.menu_open { "nav-menu active" } else { "nav-menu" }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.menu_open { "nav-toggle active" } else { "nav-toggle" }
    }

    pub fn navbar_class(&self) -> &'static str {
        if self.scrolled { "navbar scrolled" } else { "navbar" }
    }
}

/// The last section whose top, less `offset`, is at or above `scroll_y`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - offset)
        .max_by(|a, b| a.top.total_cmp(&b.top))
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0), ("about", 800.0), ("projects", 1600.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionBounds {
                id: id.to_string(),
                top,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn test_toggle_and_link_click() {
        let mut nav = NavState::new(NavConfig::default());
        assert_eq!(nav.menu_class(), "nav-menu");
        assert!(nav.toggle_menu());
        assert_eq!(nav.menu_class(), "nav-menu active");
        assert_eq!(nav.toggle_class(), "nav-toggle active");
        nav.link_clicked();
        assert!(!nav.menu_open());
        nav.link_clicked();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::new(NavConfig::default());
        assert!(!nav.on_scroll(100.0, &[]));
        assert_eq!(nav.navbar_class(), "navbar");
        assert!(nav.on_scroll(101.0, &[]));
        assert_eq!(nav.navbar_class(), "navbar scrolled");
        assert!(!nav.on_scroll(500.0, &[]));
    }

    #[test]
    fn test_active_section() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 150.0), Some("home"));
        assert_eq!(active_section(&s, 649.0, 150.0), Some("home"));
        assert_eq!(active_section(&s, 650.0, 150.0), Some("about"));
        assert_eq!(active_section(&s, 5000.0, 150.0), Some("contact"));
        assert_eq!(active_section(&[], 100.0, 150.0), None);
    }

    #[test]
    fn test_on_scroll_tracks_active() {
        let mut nav = NavState::new(NavConfig::default());
        nav.on_scroll(1500.0, &sections());
        assert_eq!(nav.active_section(), Some("projects"));
    }
}
