//! Storage accessor for the careers document.
//!
//! The whole document is read on every interaction and written back in full on
//! every change. There is no partial update.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::career::CareerDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize careers document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Backend for the careers document. Carried in `AppState` as
/// `Arc<dyn CareerStore>`.
#[async_trait]
pub trait CareerStore: Send + Sync {
    /// Loads the full document. A store that has never been written holds an
    /// empty document.
    async fn load(&self) -> Result<CareerDocument, StoreError>;

    /// Overwrites the stored document with `document`.
    async fn save(&self, document: &CareerDocument) -> Result<(), StoreError>;
}

/// A single JSON file on disk, pretty-printed with 4-space indentation.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CareerStore for JsonFileStore {
    async fn load(&self) -> Result<CareerDocument, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(CareerDocument::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, document: &CareerDocument) -> Result<(), StoreError> {
        let bytes = to_pretty_json(document)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            "Wrote {} careers to {}",
            document.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn to_pretty_json(document: &CareerDocument) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}
