use crate::error::SourceError;
use crate::layout::{REGISTRY_FILE, validate_id};
use crate::record::ArticleRecord;
use crate::ArticleSource;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use storm_types::ArticleId;

/// Articles stored as `<root>/<article id>/<file>`, registry at
/// `<root>/articles.json`.
#[derive(Debug, Clone)]
pub struct FilesystemArticleSource {
    root: PathBuf,
}

impl FilesystemArticleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn article_dir(&self, id: &ArticleId) -> Result<PathBuf, SourceError> {
        validate_id(id)?;
        Ok(self.root.join(id.as_str()))
    }

    fn file_path(&self, id: &ArticleId, file: &str) -> Result<PathBuf, SourceError> {
        if file.is_empty() || file.contains(&['/', '\\'][..]) || file == ".." {
            return Err(SourceError::NotFound(format!("{id}/{file}")));
        }
        Ok(self.article_dir(id)?.join(file))
    }
}

fn not_found_or_io(err: io::Error, what: String) -> SourceError {
    if err.kind() == io::ErrorKind::NotFound {
        SourceError::NotFound(what)
    } else {
        SourceError::Io(err)
    }
}

impl ArticleSource for FilesystemArticleSource {
    fn file_names(&self, id: &ArticleId) -> Result<Vec<String>, SourceError> {
        let dir = self.article_dir(id)?;
        let entries = fs::read_dir(&dir).map_err(|e| not_found_or_io(e, id.to_string()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_text(&self, id: &ArticleId, file: &str) -> Result<String, SourceError> {
        let path = self.file_path(id, file)?;
        debug!("Reading {}", path.display());
        fs::read_to_string(&path).map_err(|e| not_found_or_io(e, format!("{id}/{file}")))
    }

    fn write_text(&self, id: &ArticleId, file: &str, contents: &str) -> Result<(), SourceError> {
        let path = self.file_path(id, file)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(())
    }

    fn list_articles(&self) -> Result<Vec<ArticleRecord>, SourceError> {
        let path = self.root.join(REGISTRY_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(SourceError::Io(e)),
        }
    }

    fn register_article(&self, record: ArticleRecord) -> Result<(), SourceError> {
        validate_id(&record.id)?;
        let mut records = self.list_articles()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(REGISTRY_FILE), serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
