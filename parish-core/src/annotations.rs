//! Bible annotation records (highlights, notes, labels).
//!
//! CRUD happens behind the `AnnotationStore` port so the backing store can
//! be swapped: in-memory for tests, a JSON file for the CLI. Records are
//! validated shapes, not free-form maps; anything malformed is rejected
//! when the file is read.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ParishError, ParishResult};

/// Reference to a single verse (book name, 1-based chapter and verse).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A stored annotation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(flatten)]
    pub kind: AnnotationKind,
}

/// The three annotation shapes, tagged on a `kind` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnnotationKind {
    /// A colored marker on one verse
    Highlight { verse: VerseRef, color: String },
    /// Free-text commentary on one verse
    Note { verse: VerseRef, text: String },
    /// A named grouping of verses
    Label {
        name: String,
        color: String,
        verses: Vec<VerseRef>,
    },
}

/// Repository port for annotation data.
pub trait AnnotationStore {
    fn list(&self) -> ParishResult<Vec<Annotation>>;

    fn get(&self, id: &str) -> ParishResult<Annotation>;

    /// Insert a new annotation, returning its minted id.
    fn add(&mut self, kind: AnnotationKind) -> ParishResult<String>;

    fn update(&mut self, id: &str, kind: AnnotationKind) -> ParishResult<()>;

    fn delete(&mut self, id: &str) -> ParishResult<()>;
}

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

/// Annotation store held entirely in memory. Used by tests and anywhere
/// persistence isn't wanted.
#[derive(Default)]
pub struct InMemoryAnnotationStore {
    annotations: Vec<Annotation>,
}

impl InMemoryAnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnnotationStore for InMemoryAnnotationStore {
    fn list(&self) -> ParishResult<Vec<Annotation>> {
        Ok(self.annotations.clone())
    }

    fn get(&self, id: &str) -> ParishResult<Annotation> {
        self.annotations
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ParishError::AnnotationNotFound(id.to_string()))
    }

    fn add(&mut self, kind: AnnotationKind) -> ParishResult<String> {
        let id = mint_id();
        self.annotations.push(Annotation {
            id: id.clone(),
            kind,
        });
        Ok(id)
    }

    fn update(&mut self, id: &str, kind: AnnotationKind) -> ParishResult<()> {
        let annotation = self
            .annotations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ParishError::AnnotationNotFound(id.to_string()))?;
        annotation.kind = kind;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> ParishResult<()> {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            return Err(ParishError::AnnotationNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Annotation store persisted as a JSON array on disk. Every mutation
/// writes the whole file back.
pub struct JsonFileStore {
    path: PathBuf,
    annotations: Vec<Annotation>,
}

impl JsonFileStore {
    /// Open the store, starting empty if the file doesn't exist yet.
    pub fn open(path: &Path) -> ParishResult<Self> {
        let annotations = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| ParishError::Serialization(e.to_string()))?
        } else {
            Vec::new()
        };

        Ok(JsonFileStore {
            path: path.to_path_buf(),
            annotations,
        })
    }

    fn save(&self) -> ParishResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.annotations)
            .map_err(|e| ParishError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl AnnotationStore for JsonFileStore {
    fn list(&self) -> ParishResult<Vec<Annotation>> {
        Ok(self.annotations.clone())
    }

    fn get(&self, id: &str) -> ParishResult<Annotation> {
        self.annotations
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ParishError::AnnotationNotFound(id.to_string()))
    }

    fn add(&mut self, kind: AnnotationKind) -> ParishResult<String> {
        let id = mint_id();
        self.annotations.push(Annotation {
            id: id.clone(),
            kind,
        });
        self.save()?;
        Ok(id)
    }

    fn update(&mut self, id: &str, kind: AnnotationKind) -> ParishResult<()> {
        let annotation = self
            .annotations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ParishError::AnnotationNotFound(id.to_string()))?;
        annotation.kind = kind;
        self.save()
    }

    fn delete(&mut self, id: &str) -> ParishResult<()> {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            return Err(ParishError::AnnotationNotFound(id.to_string()));
        }
        self.save()
    }
}
