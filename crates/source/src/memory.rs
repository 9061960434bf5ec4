use crate::ArticleSource;
use crate::error::SourceError;
use crate::layout::validate_id;
use crate::record::ArticleRecord;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use storm_types::ArticleId;

/// Articles held in memory. Works anywhere, including tests.
#[derive(Debug, Default)]
pub struct InMemoryArticleSource {
    files: RwLock<HashMap<ArticleId, BTreeMap<String, String>>>,
    registry: RwLock<Vec<ArticleRecord>>,
}

impl InMemoryArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, builder style.
    pub fn with_file(self, id: impl Into<ArticleId>, file: &str, contents: impl Into<String>) -> Result<Self, SourceError> {
        self.write_text(&id.into(), file, &contents.into())?;
        Ok(self)
    }
}

fn poisoned<T>(_: T) -> SourceError {
    SourceError::Lock("in-memory article store".to_string())
}

impl ArticleSource for InMemoryArticleSource {
    fn file_names(&self, id: &ArticleId) -> Result<Vec<String>, SourceError> {
        let files = self.files.read().map_err(poisoned)?;
        files
            .get(id)
            .map(|f| f.keys().cloned().collect())
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    fn read_text(&self, id: &ArticleId, file: &str) -> Result<String, SourceError> {
        let files = self.files.read().map_err(poisoned)?;
        files
            .get(id)
            .and_then(|f| f.get(file))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("{id}/{file}")))
    }

    fn write_text(&self, id: &ArticleId, file: &str, contents: &str) -> Result<(), SourceError> {
        validate_id(id)?;
        let mut files = self.files.write().map_err(poisoned)?;
        files
            .entry(id.clone())
            .or_default()
            .insert(file.to_string(), contents.to_string());
        Ok(())
    }

    fn list_articles(&self) -> Result<Vec<ArticleRecord>, SourceError> {
        Ok(self.registry.read().map_err(poisoned)?.clone())
    }

    fn register_article(&self, record: ArticleRecord) -> Result<(), SourceError> {
        validate_id(&record.id)?;
        let mut registry = self.registry.write().map_err(poisoned)?;
        match registry.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => registry.push(record),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
