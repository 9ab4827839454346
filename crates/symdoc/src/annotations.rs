//! Free-text documentation keyed by canonical identity.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::GenerateError;

/// Shown wherever a description is missing.
pub const NO_DESCRIPTION: &str = "(No Description)";

/// Structured form of one documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub summary: Option<String>,
    pub returns: Option<String>,
    pub remarks: Option<String>,
    pub params: HashMap<String, String>,
    pub type_params: HashMap<String, String>,
}

impl AnnotationRecord {
    pub fn summary_or_placeholder(&self) -> &str {
        non_blank(self.summary.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    pub fn returns(&self) -> Option<&str> {
        non_blank(self.returns.as_deref())
    }

    pub fn remarks(&self) -> Option<&str> {
        non_blank(self.remarks.as_deref())
    }

    pub fn parameter(
        &self,
        name: &str,
    ) -> &str {
        self.params.get(name).map(String::as_str).unwrap_or(NO_DESCRIPTION)
    }

    pub fn type_parameter(
        &self,
        name: &str,
    ) -> &str {
        self.type_params.get(name).map(String::as_str).unwrap_or(NO_DESCRIPTION)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Lookup of annotation records by canonical identity.
///
/// A miss is the common case and is never an error.
pub trait AnnotationSource {
    fn annotation_for(
        &self,
        id: &str,
    ) -> Option<&AnnotationRecord>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    records: HashMap<String, AnnotationRecord>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let records: HashMap<String, AnnotationRecord> = serde_json::from_str(text)?;
        Ok(Self {
            records,
        })
    }

    /// Load a store from disk. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        if !path.exists() {
            info!("No annotations found at {}, using the symbol model only", path.display());
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&text).map_err(|source| GenerateError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} annotation record(s) from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn insert(
        &mut self,
        id: impl Into<String>,
        record: AnnotationRecord,
    ) {
        self.records.insert(id.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AnnotationSource for AnnotationStore {
    fn annotation_for(
        &self,
        id: &str,
    ) -> Option<&AnnotationRecord> {
        self.records.get(id)
    }
}

#[cfg(test)]
#[path = "../tests/src/annotations_tests.rs"]
mod tests;
