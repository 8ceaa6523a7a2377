//! Project detail modal.
//!
//! A click on a project link with a placeholder target opens an overlay
//! describing the project. Content comes from the static catalog, or is
//! synthesized from the card itself when the title is not in it.

mod catalog;
mod presenter;

pub use catalog::{PROJECTS, ProjectRecord, lookup};
pub use presenter::{CloseReason, ModalPhase, ModalPresenter};

/// What the page shows on a project card. Used for the fallback detail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
}

/// Everything the modal renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub overview: String,
    pub features: Vec<String>,
    pub challenges: String,
    pub demo_url: String,
    pub code_url: String,
}

const DEFAULT_FEATURES: [&str; 4] = [
    "Responsive design across devices",
    "Modern, accessible user interface",
    "Optimized performance",
    "Clean, maintainable code",
];

const DEFAULT_CHALLENGES: &str = "Balancing a rich feature set with fast load times \
                                  and a consistent experience on every screen size.";

impl ProjectDetail {
    /// Catalog entry for the card's title, or a default built from the card.
    pub fn for_card(card: &ProjectCard) -> Self {
        match lookup(&card.title) {
            Some(record) => Self::from(record),
            None => {
                tracing::debug!(
                    title = %card.title,
                    "project not in catalog, using default detail"
                );
                Self::fallback(card)
            }
        }
    }

    pub fn fallback(card: &ProjectCard) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            technologies: card.technologies.clone(),
            image: card.image.clone(),
            overview: card.description.clone(),
            features: DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect(),
            challenges: DEFAULT_CHALLENGES.to_string(),
            demo_url: "#".to_string(),
            code_url: "#".to_string(),
        }
    }

    pub fn has_demo(&self) -> bool {
        !is_placeholder_href(&self.demo_url)
    }

    pub fn has_code(&self) -> bool {
        !is_placeholder_href(&self.code_url)
    }
}

impl From<&ProjectRecord> for ProjectDetail {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.to_string(),
            description: record.description.to_string(),
            technologies: record.technologies.iter().map(|s| s.to_string()).collect(),
            image: Some(record.image.to_string()),
            overview: record.overview.to_string(),
            features: record.features.iter().map(|s| s.to_string()).collect(),
            challenges: record.challenges.to_string(),
            demo_url: record.demo_url.to_string(),
            code_url: record.code_url.to_string(),
        }
    }
}

/// True for an absent, empty or `#` link target.
pub fn is_placeholder_href(href: &str) -> bool {
    matches!(href.trim(), "" | "#")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> ProjectCard {
        ProjectCard {
            title: title.to_string(),
            description: "Card description".to_string(),
            technologies: vec!["Rust".to_string(), "WASM".to_string()],
            image: None,
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let detail = ProjectDetail::for_card(&card("Weather Dashboard"));
        assert_eq!(detail.title, "Weather Dashboard");
        assert_eq!(
            detail.technologies,
            vec!["JavaScript", "Chart.js", "OpenWeather API", "CSS Grid"]
        );
        assert!(detail.has_demo());
        assert!(detail.has_code());
    }

    #[test]
    fn test_lookup_trims_title() {
        assert!(lookup("  Task Management App\n").is_some());
        assert!(lookup("task management app").is_none());
    }

    #[test]
    fn test_fallback_uses_card() {
        let detail = ProjectDetail::for_card(&card("Side Project"));
        assert_eq!(detail.title, "Side Project");
        assert_eq!(detail.overview, "Card description");
        assert_eq!(detail.technologies, vec!["Rust", "WASM"]);
        assert_eq!(detail.features.len(), DEFAULT_FEATURES.len());
        assert!(!detail.has_demo());
        assert!(!detail.has_code());
    }

    #[test]
    fn test_catalog_keys_match_titles() {
        for (key, record) in PROJECTS.entries() {
            assert_eq!(*key, record.title);
            assert!(!record.technologies.is_empty());
        }
    }

    #[test]
    fn test_placeholder_href() {
        assert!(is_placeholder_href(""));
        assert!(is_placeholder_href("#"));
        assert!(is_placeholder_href(" # "));
        assert!(!is_placeholder_href("#projects"));
        assert!(!is_placeholder_href("https://example.com"));
    }
}
