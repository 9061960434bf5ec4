//! Command line viewer for stored STORM articles.
//!
//! # Usage
//!
//! ```bash
//! # List stored articles
//! storm-render list
//!
//! # Render an article with its TOC and bibliography
//! storm-render --output-dir ./output article Quantum_computing
//!
//! # Browse one reference
//! storm-render references Quantum_computing --index 3
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storm_annotate::{build_citation_map, parse_conversation_value};
use storm_render::{RenderError, RendererBuilder, render_conversations, render_outline, render_references};
use storm_source::layout::OUTLINE_FILE;
use storm_source::{ArticleFiles, ArticleSource, FilesystemArticleSource, SourceError, assemble_article};
use storm_toc::parse_heading;
use storm_types::{ArticleId, CitationMap};

#[derive(Parser)]
#[command(name = "storm-render")]
#[command(about = "Render stored STORM articles as markdown")]
struct Cli {
    /// Directory holding one sub-directory per article
    #[arg(long, default_value = "output", env = "STORM_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// JSON renderer configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored articles
    List,

    /// Render an article with its table of contents and bibliography
    Article { id: String },

    /// Print only the table of contents of an article
    Toc { id: String },

    /// Show the persona conversations behind an article
    Conversation { id: String },

    /// List an article's references, or show one
    References {
        id: String,

        /// Reference number to show
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Show an article's outline
    Outline { id: String },
}

fn main() -> Result<(), RenderError> {
    env_logger::init();
    let cli = Cli::parse();

    let builder = match &cli.config {
        Some(path) => RendererBuilder::new().with_config_file(path)?,
        None => RendererBuilder::new(),
    };
    let renderer = builder.build()?;
    let source = FilesystemArticleSource::new(&cli.output_dir);
    log::debug!("Reading articles from {}", cli.output_dir.display());

    match cli.command {
        Commands::List => {
            let articles = source.list_articles()?;
            if articles.is_empty() {
                println!("No articles in {}", cli.output_dir.display());
            }
            for record in articles {
                println!("{}\t{}\t{}", record.id, record.name, record.date.format("%Y-%m-%d %H:%M"));
            }
        }
        Commands::Article { id } => {
            let rendered = renderer.render_stored(&source, &ArticleId::from(id))?;
            println!("{}", rendered.to_markdown());
        }
        Commands::Toc { id } => {
            let rendered = renderer.render_stored(&source, &ArticleId::from(id))?;
            println!("{}", rendered.toc);
        }
        Commands::Conversation { id } => {
            let files = load(&source, &id)?;
            match &files.conversation_log {
                Some(log) => println!("{}", render_conversations(&parse_conversation_value(log)?)),
                None => println!("No conversation log stored for '{id}'"),
            }
        }
        Commands::References { id, index } => {
            let files = load(&source, &id)?;
            let citations = match &files.citations {
                Some(citations) => build_citation_map(citations)?,
                None => CitationMap::new(),
            };
            println!("{}", render_references(&citations, index));
        }
        Commands::Outline { id } => {
            let article_id = ArticleId::from(id.as_str());
            let outline = if source.file_names(&article_id)?.iter().any(|f| f == OUTLINE_FILE) {
                source.read_text(&article_id, OUTLINE_FILE)?
            } else {
                load(&source, &id)?
                    .article_text
                    .lines()
                    .filter(|line| parse_heading(line).is_some())
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            println!("{}", render_outline(&outline));
        }
    }
    Ok(())
}

fn load(source: &dyn ArticleSource, id: &str) -> Result<ArticleFiles, RenderError> {
    let article_id = ArticleId::from(id);
    assemble_article(source, &article_id)?
        .ok_or_else(|| SourceError::NotFound(format!("no article text stored for '{id}'")).into())
}
