//! A JSON design document standing in for the live host application.
//!
//! The document lists named elements of several kinds (views, sheets, rooms, ...).
//! It implements [`RenameHost`] so a batch can run against it: names are written in
//! place while a unit of work is open, a snapshot taken at `begin` is restored on
//! rollback, and read-only documents or locked elements refuse writes.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use reword_core::{HostError, RenameHost, RenameRequest, WriteError};

const DOCUMENT_TMP_SUFFIX: &str = ".tmp";

/// Categories of named elements found in a design document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    View,
    Sheet,
    Schedule,
    Room,
    Area,
    /// Named family instances.
    Family,
    /// Element types.
    Type,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::View => "view",
            ElementKind::Sheet => "sheet",
            ElementKind::Schedule => "schedule",
            ElementKind::Room => "room",
            ElementKind::Area => "area",
            ElementKind::Family => "family",
            ElementKind::Type => "type",
        };
        f.write_str(name)
    }
}

/// Which elements a batch enumerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindSelector {
    All,
    Kinds(BTreeSet<ElementKind>),
}

impl KindSelector {
    /// Selects exactly `kinds`; an empty list selects everything.
    pub fn from_kinds(kinds: impl IntoIterator<Item = ElementKind>) -> Self {
        let kinds: BTreeSet<ElementKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            KindSelector::All
        } else {
            KindSelector::Kinds(kinds)
        }
    }

    /// Areas, rooms, views, sheets and schedules.
    pub fn spaces() -> Self {
        Self::from_kinds([
            ElementKind::Area,
            ElementKind::Room,
            ElementKind::View,
            ElementKind::Sheet,
            ElementKind::Schedule,
        ])
    }

    pub fn families() -> Self {
        Self::from_kinds([ElementKind::Family])
    }

    pub fn types() -> Self {
        Self::from_kinds([ElementKind::Type])
    }

    pub fn matches(&self, kind: ElementKind) -> bool {
        match self {
            KindSelector::All => true,
            KindSelector::Kinds(kinds) => kinds.contains(&kind),
        }
    }
}

/// One named element of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: u64,
    pub kind: ElementKind,
    pub name: String,
    #[serde(default)]
    pub locked: bool,
    /// Fields this tool does not interpret, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Element {
    pub fn new(id: u64, kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            locked: false,
            extra: Map::new(),
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// Errors loading or saving a document file.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse document {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("Document {path} contains element id {id} more than once")]
    DuplicateId { path: PathBuf, id: u64 },

    #[error("Failed to write document {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Names captured when a unit of work opens.
#[derive(Debug, Clone)]
struct Snapshot {
    label: String,
    names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    snapshot: Option<Snapshot>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            read_only: false,
            elements,
            extra: Map::new(),
            snapshot: None,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        info!("Loading document from: {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Document = serde_json::from_str(&text).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut seen = HashSet::new();
        for element in &document.elements {
            if !seen.insert(element.id) {
                return Err(DocumentError::DuplicateId {
                    path: path.to_path_buf(),
                    id: element.id,
                });
            }
        }

        debug!("Document has {} elements.", document.elements.len());
        Ok(document)
    }

    /// Writes the document through a temporary file and renames it into place.
    ///
    /// The temporary file is removed again if any step fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(DOCUMENT_TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        if let Err(source) = write_and_replace(&tmp_path, path, &json) {
            if tmp_path.exists() {
                if let Err(e) = fs::remove_file(&tmp_path) {
                    warn!("Could not remove {}: {}", tmp_path.display(), e);
                }
            }
            return Err(DocumentError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        info!("Document written to {}", path.display());
        Ok(())
    }

    pub fn element(&self, id: u64) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn in_unit_of_work(&self) -> bool {
        self.snapshot.is_some()
    }
}

fn write_and_replace(tmp_path: &Path, path: &Path, json: &[u8]) -> std::io::Result<()> {
    {
        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp_path)?;
        tmp.write_all(json)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
    }
    fs::rename(tmp_path, path)
}

impl RenameHost for Document {
    type Id = u64;
    type Selector = KindSelector;

    fn enumerate(&self, selector: &KindSelector) -> Vec<RenameRequest<u64>> {
        self.elements
            .iter()
            .filter(|e| selector.matches(e.kind))
            .map(|e| RenameRequest::new(e.id, e.name.clone()))
            .collect()
    }

    fn write_name(&mut self, id: &u64, new_name: &str) -> Result<(), WriteError> {
        if self.snapshot.is_none() {
            return Err(WriteError::NoUnitOfWork);
        }
        if self.read_only {
            return Err(WriteError::ReadOnly);
        }
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == *id)
            .ok_or_else(|| WriteError::NotFound(id.to_string()))?;
        if element.locked {
            return Err(WriteError::Locked(id.to_string()));
        }
        element.name = new_name.to_string();
        Ok(())
    }

    fn begin(&mut self, label: &str) -> Result<(), HostError> {
        if let Some(open) = &self.snapshot {
            return Err(HostError::AlreadyOpen(open.label.clone()));
        }
        self.snapshot = Some(Snapshot {
            label: label.to_string(),
            names: self.elements.iter().map(|e| e.name.clone()).collect(),
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<(), HostError> {
        self.snapshot.take().map(|_| ()).ok_or(HostError::NotOpen)
    }

    fn rollback(&mut self) -> Result<(), HostError> {
        let snapshot = self.snapshot.take().ok_or(HostError::NotOpen)?;
        for (element, name) in self.elements.iter_mut().zip(snapshot.names) {
            element.name = name;
        }
        Ok(())
    }
}
