//! Whole-file JSON snapshot documents.
//!
//! Every persisted structure is read and written as one JSON document. A
//! save writes a temporary file in the target directory and renames it over
//! the destination, so a failed write leaves the prior contents untouched.

use crate::error::{EngineError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Typed handle to one JSON document on disk.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonDocument<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> JsonDocument<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decode the document. A missing file is `Ok(None)`; an
    /// unreadable or undecodable one is an error for the caller's policy
    /// layer to handle.
    pub fn load(&self) -> Result<Option<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(EngineError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| EngineError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    /// Serialize `value` and atomically replace the document.
    pub fn save(&self, value: &T) -> Result<()> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| EngineError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| EngineError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json).map_err(|source| EngineError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| EngineError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
