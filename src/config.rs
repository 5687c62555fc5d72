use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, BlueprintResult};
use crate::theme::Theme;

/// Document-level metadata for the exported page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub lang: String,
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: "Confirmation Bias Motion Reel Blueprint".to_string(),
            description:
                "Motion graphics production blueprint for explaining confirmation bias in investing."
                    .to_string(),
        }
    }
}

/// Everything about the page that is not content: metadata and design tokens.
///
/// Every level is `#[serde(default)]`, so a JSON file only needs the keys it
/// overrides:
///
/// ```json
/// { "meta": { "lang": "hi" }, "theme": { "colors": { "accent": "#2EC4B6" } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub meta: PageMeta,
    pub theme: Theme,
}

impl SiteConfig {
    pub fn from_json(s: &str) -> BlueprintResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> BlueprintResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BlueprintError::config(format!("read '{}': {e}", path.display()))
        })?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn validate(&self) -> BlueprintResult<()> {
        if self.meta.lang.trim().is_empty() {
            return Err(BlueprintError::config("meta.lang is empty"));
        }
        if self.meta.title.trim().is_empty() {
            return Err(BlueprintError::config("meta.title is empty"));
        }
        self.theme.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_overrides_only_named_keys() {
        let config = SiteConfig::from_json(
            r##"{ "meta": { "lang": "hi" }, "theme": { "colors": { "accent": "#2EC4B6" } } }"##,
        )
        .unwrap();

        assert_eq!(config.meta.lang, "hi");
        assert_eq!(config.meta.title, PageMeta::default().title);
        assert_eq!(config.theme.colors.accent, "#2EC4B6");
        assert_eq!(config.theme.colors.primary, "#F25F5C");
        assert_eq!(config.theme.fonts.display, "Plus Jakarta Sans");
        config.validate().unwrap();
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SiteConfig::from_json("{ \"meta\": ").unwrap_err();
        assert!(matches!(err, BlueprintError::Json(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = SiteConfig::load(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(matches!(err, BlueprintError::Config(_)));
        assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn blank_meta_is_rejected() {
        let mut config = SiteConfig::default();
        config.meta.title = " ".to_string();
        assert!(config.validate().is_err());
    }
}
