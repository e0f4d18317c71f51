//! Content-type snapshot loader.
//!
//! The generator consumes content types from a JSON snapshot file, the
//! saved result of a delivery-API fetch. Both the wrapped response shape
//! (`{ "types": [...] }`) and a bare array of types are accepted.

use crate::error::{CliResult, SourceError};
use crate::schema::ContentType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted snapshot layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Wrapped {
        #[serde(default)]
        types: Vec<ContentType>,
    },
    Bare(Vec<ContentType>),
}

/// Loads content types from a snapshot file.
#[derive(Debug)]
pub struct SchemaSource {
    path: PathBuf,
}

impl SchemaSource {
    /// Create a source reading from the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and deserialize the content-type list.
    ///
    /// Returns the types in the order they appear in the snapshot.
    pub fn load(&self) -> CliResult<Vec<ContentType>> {
        if !self.path.exists() {
            return Err(SourceError::not_found(self.path.clone()).into());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| SourceError::invalid_json(self.path.clone(), e.to_string()))?;

        let types = match snapshot {
            Snapshot::Wrapped { types } => types,
            Snapshot::Bare(types) => types,
        };

        Ok(types)
    }

    /// Get the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
