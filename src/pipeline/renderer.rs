use super::config::{RenderConfig, TocMode};
use crate::error::RenderError;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use storm_annotate::{ArticleAnnotator, build_bibliography, build_citation_map, normalize_reference_lines};
use storm_source::{ArticleSource, assemble_article, read_co_storm_report};
use storm_toc::{HeadingIndexer, TOC_LINK_STYLE, TableOfContents, render_plain_links, render_plain_links_labeled, tag_headings};
use storm_types::{
    ArticleId, CitationMap, CitationSource, CoStormState, GenerationState, HeadingEntry, WikiWriteState,
};

/// The raw generation output handed to [`ArticleRenderer::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub article_text: &'a str,
    pub citations: Option<&'a CitationSource>,
}

impl<'a> RenderInput<'a> {
    pub fn new(article_text: &'a str) -> Self {
        Self {
            article_text,
            citations: None,
        }
    }

    pub fn with_citations(mut self, citations: &'a CitationSource) -> Self {
        self.citations = Some(citations);
        self
    }
}

/// A display-ready article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArticle {
    /// Annotated article text.
    pub body: String,
    /// Rendered table of contents, empty when the article has no headings.
    pub toc: String,
    pub headings: Vec<HeadingEntry>,
    pub bibliography: Option<String>,
}

impl RenderedArticle {
    /// Joins TOC, body and bibliography into one markdown document.
    pub fn to_markdown(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if !self.toc.is_empty() {
            parts.push(&self.toc);
        }
        parts.push(&self.body);
        if let Some(bibliography) = &self.bibliography {
            parts.push(bibliography);
        }
        parts.join("\n\n")
    }
}

/// Turns generated articles into [`RenderedArticle`]s.
///
/// Created through [`RendererBuilder`](super::RendererBuilder).
#[derive(Debug, Clone)]
pub struct ArticleRenderer {
    annotator: ArticleAnnotator,
    indexer: HeadingIndexer,
    config: RenderConfig,
}

impl ArticleRenderer {
    pub(crate) fn new(annotator: ArticleAnnotator, indexer: HeadingIndexer, config: RenderConfig) -> Self {
        Self {
            annotator,
            indexer,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn annotator(&self) -> &ArticleAnnotator {
        &self.annotator
    }

    pub fn indexer(&self) -> &HeadingIndexer {
        &self.indexer
    }

    /// Renders a finished article.
    ///
    /// Fails with [`RenderError::NotReady`] while `state` is not displayable,
    /// so half-written output never reaches the page.
    pub fn render(&self, state: GenerationState, input: RenderInput<'_>) -> Result<RenderedArticle, RenderError> {
        ensure_displayable(state)?;

        let citations = match input.citations {
            Some(source) => build_citation_map(source)?,
            None => CitationMap::new(),
        };
        let mut rendered = self.render_body(input.article_text, &citations);

        if self.config.include_bibliography {
            if let Some(source) = input.citations {
                rendered.bibliography = Some(build_bibliography(source)?);
            }
        }
        Ok(rendered)
    }

    /// Renders with an already built citation map, as interactive sessions
    /// keep one in their knowledge base. No bibliography is attached.
    pub fn render_with_citations(
        &self,
        state: GenerationState,
        article_text: &str,
        citations: &CitationMap,
    ) -> Result<RenderedArticle, RenderError> {
        ensure_displayable(state)?;
        Ok(self.render_body(article_text, citations))
    }

    /// Loads article `id` from `source` and renders it as a completed wiki
    /// article.
    pub fn render_stored(&self, source: &dyn ArticleSource, id: &ArticleId) -> Result<RenderedArticle, RenderError> {
        let files = assemble_article(source, id)?.ok_or_else(|| {
            storm_source::SourceError::NotFound(format!("no article text stored for '{id}'"))
        })?;
        info!("Rendering '{}' from {} ({})", id, files.article_file, source.name());

        let mut input = RenderInput::new(&files.article_text);
        if let Some(citations) = &files.citations {
            input = input.with_citations(citations);
        }
        self.render(GenerationState::Wiki(WikiWriteState::Completed), input)
    }

    /// Loads the report an interactive session stored for `id` and renders
    /// it between turns, linking citations through `citations`.
    pub fn render_stored_report(
        &self,
        source: &dyn ArticleSource,
        id: &ArticleId,
        citations: &CitationMap,
    ) -> Result<RenderedArticle, RenderError> {
        let report = read_co_storm_report(source, id)?.ok_or_else(|| {
            storm_source::SourceError::NotFound(format!("no co-storm report stored for '{id}'"))
        })?;
        info!("Rendering co-storm report '{}' ({})", id, source.name());
        self.render_with_citations(GenerationState::CoStorm(CoStormState::Conversation), &report, citations)
    }

    /// Renders the TOC of a serialized knowledge tree.
    pub fn render_tree_toc(&self, tree: &Value) -> Result<String, RenderError> {
        let toc = self.indexer.build_from_value(tree)?;
        Ok(self.decorate(toc.render_markdown()))
    }

    fn render_body(&self, article_text: &str, citations: &CitationMap) -> RenderedArticle {
        let normalized = normalize_reference_lines(article_text);
        let annotated = self.annotator.annotate(&normalized, citations);

        let label = self.config.section_label.as_deref();
        let index: TableOfContents = self.indexer.build_from_markdown(&annotated, label);
        let (body, toc) = match self.config.toc_style {
            TocMode::Anchored => {
                let slug = self.indexer.style().slug;
                let mut body = tag_headings(&annotated, slug);
                // The label entry has no heading in the body to carry its id.
                if let Some(anchor) = label.map(|l| slug.slugify(l)).filter(|id| !id.is_empty()) {
                    body.insert_str(0, &format!("<a id=\"{anchor}\"></a>\n"));
                }
                (body, self.decorate(index.render_markdown()))
            }
            TocMode::Plain => {
                let toc = match label {
                    Some(label) => render_plain_links_labeled(&annotated, label),
                    None => render_plain_links(&annotated),
                };
                (annotated, toc)
            }
        };

        debug!("Rendered article with {} headings, {} citations", index.len(), citations.len());
        RenderedArticle {
            body,
            toc,
            headings: index.entries().to_vec(),
            bibliography: None,
        }
    }

    fn decorate(&self, toc: String) -> String {
        if toc.is_empty() || !self.config.include_link_style || self.config.toc_style != TocMode::Anchored {
            return toc;
        }
        format!("{TOC_LINK_STYLE}\n{toc}")
    }
}

fn ensure_displayable(state: GenerationState) -> Result<(), RenderError> {
    if state.is_displayable() {
        Ok(())
    } else {
        debug!("Refusing to render in state {state}");
        Err(RenderError::NotReady(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RendererBuilder;
    use serde_json::json;
    use storm_source::InMemoryArticleSource;
    use storm_source::layout::CO_STORM_ARTICLE_FILE;
    use storm_types::{CitationEntry, SourceInfo};

    const ARTICLE: &str = "Write the lead section:\n# Topic\n\nIntro costs $5 [1].\n\n## History\n\nEarly days [2].";

    fn citations() -> CitationSource {
        let mut source = CitationSource::default();
        source.insert("https://a.example", 1, SourceInfo { title: "A".into(), snippets: vec![] });
        source.insert("https://b.example", 2, SourceInfo { title: "B".into(), snippets: vec![] });
        source
    }

    #[test]
    fn test_not_ready_states_are_refused() {
        let renderer = RendererBuilder::new().build().unwrap();
        for state in [
            GenerationState::Wiki(WikiWriteState::PreWriting),
            GenerationState::Wiki(WikiWriteState::FinalWriting),
            GenerationState::CoStorm(CoStormState::TakingTurn),
        ] {
            let err = renderer.render(state, RenderInput::new(ARTICLE)).unwrap_err();
            assert!(matches!(err, RenderError::NotReady(s) if s == state));
        }
    }

    #[test]
    fn test_anchored_render() {
        let renderer = RendererBuilder::new().build().unwrap();
        let source = citations();
        let rendered = renderer
            .render(GenerationState::default(), RenderInput::new(ARTICLE).with_citations(&source))
            .unwrap();

        assert!(!rendered.body.contains("Write the lead section"));
        assert!(rendered.body.contains("[[1]](https://a.example)"));
        assert!(rendered.body.contains("\\$5"));
        assert!(rendered.body.contains("## History <a id=\"history\"></a>"));

        assert!(rendered.toc.starts_with(TOC_LINK_STYLE));
        assert!(rendered.toc.contains("\n    - <a href=\"#history\" class=\"toc\">History</a>"));
        assert_eq!(rendered.headings.len(), 1);

        let bibliography = rendered.bibliography.as_deref().unwrap();
        assert!(bibliography.starts_with("# References"));
    }

    #[test]
    fn test_plain_render_leaves_body_untagged() {
        let renderer = RendererBuilder::new()
            .with_toc_mode(TocMode::Plain)
            .with_bibliography(false)
            .build()
            .unwrap();
        let rendered = renderer
            .render(GenerationState::default(), RenderInput::new("Lead.\n# Intro\n\n## Deep Dive\ntext"))
            .unwrap();

        assert_eq!(rendered.body, "Lead.\n# Intro\n\n## Deep Dive\ntext");
        assert_eq!(rendered.toc, "- [Intro](#intro)\n  - [Deep Dive](#deep-dive)");
        assert!(!rendered.toc.contains("<style>"));
        assert_eq!(rendered.bibliography, None);
    }

    #[test]
    fn test_render_with_citations_for_co_storm() {
        let renderer = RendererBuilder::new().build().unwrap();
        let mut map = CitationMap::new();
        map.insert(1, CitationEntry::new("https://kb.example", "KB"));

        let rendered = renderer
            .render_with_citations(GenerationState::CoStorm(CoStormState::Conversation), "# Report\nSee [1].", &map)
            .unwrap();
        assert!(rendered.body.contains("[[1]](https://kb.example)"));
        assert_eq!(rendered.bibliography, None);
    }

    #[test]
    fn test_label_anchor_resolves() {
        let renderer = RendererBuilder::new().with_section_label("Article").build().unwrap();
        let rendered = renderer
            .render(GenerationState::default(), RenderInput::new("Lead.\n# Intro\r\nx"))
            .unwrap();

        assert!(rendered.body.starts_with("<a id=\"article\"></a>\nLead.\n"));
        assert!(rendered.body.contains("# Intro <a id=\"intro\"></a>\r\nx"));
        for href in rendered.toc.split("href=\"#").skip(1) {
            let id = &href[..href.find('"').unwrap()];
            assert!(rendered.body.contains(&format!("<a id=\"{id}\"></a>")), "unresolved #{id}");
        }
    }

    #[test]
    fn test_render_stored_report() {
        let source = InMemoryArticleSource::new()
            .with_file("session", CO_STORM_ARTICLE_FILE, "# Report\nIntro.\n## Findings\nSee [1].\n\n[1]: \"KB\" https://kb.example")
            .unwrap();
        let mut map = CitationMap::new();
        map.insert(1, CitationEntry::new("https://kb.example", "KB"));

        let renderer = RendererBuilder::new().build().unwrap();
        let rendered = renderer
            .render_stored_report(&source, &ArticleId::from("session"), &map)
            .unwrap();
        assert!(rendered.body.contains("See [[1]](https://kb.example)."));
        assert!(rendered.body.contains("[[1]](https://kb.example): https://kb.example"));
        assert!(rendered.body.contains("## Findings <a id=\"findings\"></a>"));

        let err = renderer
            .render_stored_report(&source, &ArticleId::from("missing"), &map)
            .unwrap_err();
        assert!(matches!(err, RenderError::Source(storm_source::SourceError::NotFound(_))));
    }

    #[test]
    fn test_render_tree_toc() {
        let renderer = RendererBuilder::new().with_link_style(false).build().unwrap();
        let tree = json!({"name": "root", "children": [{"name": "Background", "children": []}]});
        assert_eq!(
            renderer.render_tree_toc(&tree).unwrap(),
            "  - <a href=\"#background\" class=\"toc\">Background</a>"
        );
    }

    #[test]
    fn test_to_markdown_joins_sections() {
        let rendered = RenderedArticle {
            body: "body".into(),
            toc: String::new(),
            headings: vec![],
            bibliography: Some("# References\n\n".into()),
        };
        assert_eq!(rendered.to_markdown(), "body\n\n# References\n\n");
    }
}
