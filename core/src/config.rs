//! Site configuration loading.
//!
//! The web build embeds `site.toml` at compile time. A malformed file must
//! not take the page down, so [`load_or_default`] logs and falls back.

use folio_types::SiteConfig;

use crate::error::ConfigError;

/// Parse a configuration document. Missing tables and keys take defaults.
pub fn load_str(contents: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Parse a configuration document, falling back to defaults on error.
pub fn load_or_default(contents: &str) -> SiteConfig {
    match load_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid site config, using defaults");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_str() {
        let config = load_str(
            r#"
[notifications]
visible_ms = 3000

[effects]
particle_count = 10
"#,
        )
        .unwrap();
        assert_eq!(config.notifications.visible_ms, 3000);
        assert_eq!(config.notifications.slide_out_ms, 300);
        assert_eq!(config.effects.particle_count, 10);
    }

    #[test]
    fn test_shipped_site_config_matches_defaults() {
        let shipped = load_str(include_str!("../../app/site.toml")).unwrap();
        assert_eq!(shipped, SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(matches!(
            load_str("[reveal]\nthreshold = \"high\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = load_or_default("not = [valid");
        assert_eq!(config, SiteConfig::default());
    }
}
