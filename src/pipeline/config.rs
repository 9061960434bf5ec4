//! Renderer configuration, loadable from JSON.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use storm_annotate::PREAMBLE_MARKER;
use storm_toc::TocStyle;

/// Selects how the table of contents links to the article body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TocMode {
    /// `class="toc"` HTML links into ids the renderer tags onto every heading.
    #[default]
    Anchored,
    /// Markdown links to the ids a markdown viewer derives from heading text.
    /// The body is left untagged.
    Plain,
}

impl TocMode {
    pub fn style(self) -> TocStyle {
        match self {
            TocMode::Anchored => TocStyle::ANCHORED,
            TocMode::Plain => TocStyle::PLAIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Generation prompt echo that precedes the article proper.
    pub preamble_marker: String,
    pub toc_style: TocMode,
    /// When set, the TOC lists the article as a subsection under this label.
    pub section_label: Option<String>,
    pub escape_dollars: bool,
    pub include_bibliography: bool,
    /// Prepends the link style block to anchored TOCs.
    pub include_link_style: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preamble_marker: PREAMBLE_MARKER.to_string(),
            toc_style: TocMode::default(),
            section_label: None,
            escape_dollars: true,
            include_bibliography: true,
            include_link_style: true,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|e| {
            RenderError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }

    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if self.preamble_marker.is_empty() {
            return Err(RenderError::Config("preamble_marker must not be empty".to_string()));
        }
        if matches!(&self.section_label, Some(label) if label.trim().is_empty()) {
            return Err(RenderError::Config("section_label must not be blank".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.preamble_marker, "Write the lead section:");
        assert_eq!(config.toc_style, TocMode::Anchored);
        assert!(config.escape_dollars);
        assert!(config.include_bibliography);
    }

    #[test]
    fn test_partial_override() {
        let config = RenderConfig::from_json(
            r#"{"toc_style": "plain", "section_label": "Article", "escape_dollars": false}"#,
        )
        .unwrap();
        assert_eq!(config.toc_style, TocMode::Plain);
        assert_eq!(config.toc_style.style(), TocStyle::PLAIN);
        assert_eq!(config.section_label.as_deref(), Some("Article"));
        assert!(!config.escape_dollars);
        assert!(config.include_link_style);
    }

    #[test]
    fn test_unknown_toc_style_is_rejected() {
        let err = RenderConfig::from_json(r#"{"toc_style": "fancy"}"#).unwrap_err();
        assert!(matches!(err, RenderError::Json(_)));
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());

        let empty_marker = RenderConfig {
            preamble_marker: String::new(),
            ..Default::default()
        };
        assert!(matches!(empty_marker.validate(), Err(RenderError::Config(_))));

        let blank_label = RenderConfig {
            section_label: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(blank_label.validate(), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RenderConfig::from_file("/definitely/not/here.json").unwrap_err();
        match err {
            RenderError::Io(e) => assert!(e.to_string().contains("/definitely/not/here.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
