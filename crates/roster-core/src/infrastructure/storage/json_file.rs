//! Durable flat-file backend
//!
//! One pretty-printed JSON document holds every collection under its own
//! top-level key. The whole document is rewritten on every persist, through
//! a temp file renamed into place, and the write completes before the
//! mutating operation returns. Top-level keys this process does not manage
//! are carried through untouched.
//!
//! Single-process assumption: the internal mutex serializes document
//! rewrites between collections, but nothing guards against concurrent
//! external writers to the same file.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::{CollectionBackend, DomainError, DomainResult};

/// Durable backend over a single JSON document
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    document: Mutex<Map<String, Value>>,
}

impl JsonFileBackend {
    /// Open the document at `path`
    ///
    /// An absent file is initialised with an empty array per known
    /// collection and written immediately; a present file is loaded as-is.
    pub async fn open(
        path: impl Into<PathBuf>,
        collections: &[&str],
    ) -> DomainResult<Self> {
        let path = path.into();
        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
                    DomainError::persistence(format!(
                        "malformed store document {}: {e}",
                        path.display()
                    ))
                })?;
                match value {
                    Value::Object(map) => map,
                    _ => {
                        return Err(DomainError::persistence(format!(
                            "store document {} is not a JSON object",
                            path.display()
                        )))
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let mut map = Map::new();
                for collection in collections {
                    map.insert((*collection).to_string(), Value::Array(Vec::new()));
                }
                write_document(&path, &map).await?;
                tracing::info!(path = %path.display(), "initialised store document");
                map
            }
            Err(e) => {
                return Err(DomainError::persistence(format!(
                    "cannot read store document {}: {e}",
                    path.display()
                )))
            }
        };

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CollectionBackend for JsonFileBackend {
    async fn load(&self, collection: &str) -> DomainResult<Option<Vec<Value>>> {
        let document = self.document.lock().await;
        match document.get(collection) {
            Some(Value::Array(records)) => Ok(Some(records.clone())),
            Some(_) => Err(DomainError::persistence(format!(
                "collection '{collection}' in {} is not an array",
                self.path.display()
            ))),
            None => Ok(None),
        }
    }

    async fn persist(&self, collection: &str, records: Vec<Value>) -> DomainResult<()> {
        let mut document = self.document.lock().await;
        document.insert(collection.to_string(), Value::Array(records));
        write_document(&self.path, &document).await
    }
}

/// Write the full document: temp file in the same directory, then rename
async fn write_document(path: &Path, document: &Map<String, Value>) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| DomainError::persistence(e.to_string()))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json).await.map_err(|e| {
        DomainError::persistence(format!("cannot write {}: {e}", tmp.display()))
    })?;
    tokio::fs::rename(&tmp, path).await.map_err(|e| {
        DomainError::persistence(format!("cannot replace {}: {e}", path.display()))
    })
}
