//! Where documents come from. A [`Source`] only has to list document names
//! and hand back raw bytes for a name; it does not care what is in them.

use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};

use camino::Utf8PathBuf;

use crate::fs;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no document named `{0}`")]
    NotFound(String),
}

pub trait Source: Send + Sync {
    /// Every document name, in scan order.
    fn list(&self) -> Result<Vec<String>, SourceError>;

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError>;
}

/// The regular files of a single directory, scanned in name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: Utf8PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for DirectorySource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(fs::file_names(&self.root)?)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(name.to_owned()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Documents held in memory, listed in name order. Contents can be swapped out
/// between refreshes.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), content.into());
    }

    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }
}

impl<N: Into<String>, C: Into<Vec<u8>>> FromIterator<(N, C)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let documents = iter
            .into_iter()
            .map(|(name, content)| (name.into(), content.into()))
            .collect();
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl Source for MemorySource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_owned()))
    }
}
