// src/pipeline/builder.rs
use super::config::{RenderConfig, TocMode};
use super::renderer::ArticleRenderer;
use crate::error::RenderError;
use std::path::Path;
use storm_annotate::ArticleAnnotator;
use storm_toc::HeadingIndexer;

/// A builder for creating an [`ArticleRenderer`].
#[derive(Debug, Clone, Default)]
pub struct RendererBuilder {
    config: RenderConfig,
}

impl RendererBuilder {
    /// Creates a new `RendererBuilder` with the default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RenderError> {
        self.config = RenderConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_toc_mode(mut self, mode: TocMode) -> Self {
        self.config.toc_style = mode;
        self
    }

    /// Lists the article under `label` in the TOC.
    pub fn with_section_label(mut self, label: impl Into<String>) -> Self {
        self.config.section_label = Some(label.into());
        self
    }

    pub fn with_preamble_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.preamble_marker = marker.into();
        self
    }

    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.config.escape_dollars = escape;
        self
    }

    pub fn with_bibliography(mut self, include: bool) -> Self {
        self.config.include_bibliography = include;
        self
    }

    pub fn with_link_style(mut self, include: bool) -> Self {
        self.config.include_link_style = include;
        self
    }

    /// Validates the configuration and creates the `ArticleRenderer`.
    pub fn build(self) -> Result<ArticleRenderer, RenderError> {
        self.config.validate()?;

        let annotator = ArticleAnnotator::new()
            .with_preamble_marker(self.config.preamble_marker.as_str())
            .map_err(|e| RenderError::Config(e.to_string()))?
            .with_escaping(self.config.escape_dollars);
        let indexer = HeadingIndexer::with_style(self.config.toc_style.style());

        log::debug!(
            "Built renderer (toc: {:?}, label: {:?}, escaping: {})",
            self.config.toc_style,
            self.config.section_label,
            self.config.escape_dollars
        );
        Ok(ArticleRenderer::new(annotator, indexer, self.config))
    }
}
