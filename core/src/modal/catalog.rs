//! Static project records, keyed by card title.

use phf::phf_map;

/// A project record compiled into the binary.
#[derive(Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Display order matters
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub overview: &'static str,
    pub features: &'static [&'static str],
    pub challenges: &'static str,
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

pub static PROJECTS: phf::Map<&'static str, ProjectRecord> = phf_map! {
    "E-Commerce Platform" => ProjectRecord {
        title: "E-Commerce Platform",
        description: "A full-stack storefront with cart, checkout and an admin dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        image: "images/projects/ecommerce.png",
        overview: "An online store built end to end: product catalogue, persistent carts, \
                   Stripe checkout and an inventory dashboard for store owners.",
        features: &[
            "Product search with category and price filters",
            "Persistent cart across sessions",
            "Stripe payment integration",
            "Order history and tracking",
            "Admin dashboard for inventory management",
        ],
        challenges: "Keeping stock levels consistent while several checkouts race for the \
                     last items, solved with reservation windows on cart entries.",
        demo_url: "https://example.com/demo/ecommerce",
        code_url: "https://github.com/example/ecommerce-platform",
    },
    "Task Management App" => ProjectRecord {
        title: "Task Management App",
        description: "A collaborative board for planning work with real-time updates.",
        technologies: &["Vue.js", "Firebase", "Vuex", "Tailwind CSS"],
        image: "images/projects/tasks.png",
        overview: "A kanban style task manager where teams share boards and see each \
                   other's changes live.",
        features: &[
            "Drag and drop between columns",
            "Real-time sync between collaborators",
            "Due dates with reminders",
            "Labels and filtering",
        ],
        challenges: "Resolving concurrent edits to the same card without losing either \
                     user's change.",
        demo_url: "https://example.com/demo/tasks",
        code_url: "https://github.com/example/task-manager",
    },
    "Weather Dashboard" => ProjectRecord {
        title: "Weather Dashboard",
        description: "Location-aware forecasts with interactive charts.",
        technologies: &["JavaScript", "Chart.js", "OpenWeather API", "CSS Grid"],
        image: "images/projects/weather.png",
        overview: "A dashboard showing current conditions and a seven day forecast for \
                   the visitor's location or any searched city.",
        features: &[
            "Geolocation with manual city search",
            "Hourly and weekly forecast charts",
            "Saved favourite locations",
            "Unit switching between metric and imperial",
        ],
        challenges: "Staying inside the API rate limit while refreshing several saved \
                     locations, handled with cached responses and staggered refreshes.",
        demo_url: "https://example.com/demo/weather",
        code_url: "https://github.com/example/weather-dashboard",
    },
};

pub fn lookup(title: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.get(title.trim())
}
