//! Inline style patches and CSS value formatting.
//!
//! Controllers never write style strings directly. They return a
//! [`StylePatch`] which the frontend either renders into a `style`
//! attribute or applies property by property to a live element.

use serde::{Deserialize, Serialize};

/// Ordered set of CSS property assignments.
///
/// Setting a property twice keeps the original position and replaces the
/// value. An empty value means "remove the inline property".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePatch {
    entries: Vec<(String, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StylePatch::insert`].
    pub fn set(mut self, property: &str, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Merge `other` on top of `self`.
    pub fn merge(mut self, other: &StylePatch) -> Self {
        for (p, v) in other.iter() {
            self.insert(p, v);
        }
        self
    }

    /// Render as the contents of a `style` attribute. Removals are skipped.
    ///
    /// # Examples
    /// ```
    /// use folio_types::StylePatch;
    /// let patch = StylePatch::new()
    ///     .set("transform", "translateY(-5px)")
    ///     .set("box-shadow", "");
    /// assert_eq!(patch.to_inline(), "transform: translateY(-5px);");
    /// ```
    pub fn to_inline(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Format a pixel length, dropping a zero fractional part.
///
/// ```
/// use folio_types::style::px;
/// assert_eq!(px(12.0), "12px");
/// assert_eq!(px(2.5), "2.5px");
/// ```
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value:.1}px")
    }
}

/// Format a percentage with at most two decimals.
pub fn percent(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}

/// Format a vertical translation.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({})", px(offset))
}

/// Format a 2D translation.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", px(x), px(y))
}

/// Format seconds for `animation-duration` / `animation-delay`.
pub fn seconds(value: f64) -> String {
    format!("{value:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut patch = StylePatch::new().set("a", "1").set("b", "2");
        patch.insert("a", "3");
        assert_eq!(patch.to_inline(), "a: 3; b: 2;");
    }

    #[test]
    fn test_merge() {
        let base = StylePatch::new().set("transform", "none").set("opacity", "1");
        let top = StylePatch::new().set("transform", "scale(1.1)");
        let merged = base.merge(&top);
        assert_eq!(merged.get("transform"), Some("scale(1.1)"));
        assert_eq!(merged.get("opacity"), Some("1"));
    }

    #[test]
    fn test_px() {
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(-5.0), "-5px");
        assert_eq!(px(3.26), "3.3px");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(50.0), "50%");
        assert_eq!(percent(33.333), "33.33%");
        assert_eq!(percent(12.5), "12.5%");
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate_y(120.0), "translateY(120px)");
        assert_eq!(translate(10.0, 20.5), "translate(10px, 20.5px)");
        assert_eq!(seconds(1.5), "1.50s");
    }
}
