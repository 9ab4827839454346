//! Generator settings.
//!
//! Settings are split into one file per category. [`GeneratorSettings`]
//! aggregates them and reads `symdoc.toml`, where each category is a table
//! either at the document root or under `[symdoc]`.

pub(crate) mod logging;
pub(crate) mod output;
pub(crate) mod pages;
pub(crate) mod thread_pool;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Value;
use tracing::{debug, warn};

use crate::error::GenerateError;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use output::OutputSettingsPatch;
pub use output::{DEFAULT_OUTPUT_DIRECTORY, DEFAULT_ROOT_NAME, DEFAULT_SLIM_FILE_NAME, OutputSettings};
pub use pages::PageSettings;
use pages::PageSettingsPatch;
use thread_pool::ThreadPoolSettingsPatch;
pub use thread_pool::{MAX_WORKER_THREADS, MIN_WORKER_THREADS, ThreadPoolSettings};

pub const SETTINGS_FILE_NAME: &str = "symdoc.toml";
pub const SETTINGS_SECTION_KEY: &str = "symdoc";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorSettings {
    pub output: OutputSettings,
    pub pages: PageSettings,
    pub logging: LoggingSettings,
    pub thread_pool: ThreadPoolSettings,
}

impl GeneratorSettings {
    /// Parse settings text on top of the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let document: Value = toml::from_str(text)?;
        Ok(Self::default().merged_with_document(&document))
    }

    /// Read a settings file from disk.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| GenerateError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn merged_with_document(
        &self,
        document: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in document_candidates(document) {
            match candidate.clone().try_into::<GeneratorSettingsPatch>() {
                Ok(patch) => merged.apply_patch(patch),
                Err(error) => warn!("Ignoring malformed settings table: {error}"),
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: GeneratorSettingsPatch,
    ) {
        if let Some(p) = patch.output {
            self.output.apply_patch(p);
        }
        if let Some(p) = patch.pages {
            self.pages.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
        if let Some(p) = patch.thread_pool {
            self.thread_pool.apply_patch(p);
        }
    }

    /// Re-apply defaults and clamps after fields were set directly.
    pub fn normalize(&mut self) {
        self.output.normalize();
        self.thread_pool.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct GeneratorSettingsPatch {
    output: Option<OutputSettingsPatch>,
    pages: Option<PageSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    thread_pool: Option<ThreadPoolSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn document_candidates(document: &Value) -> Vec<&Value> {
    let mut candidates = vec![document];
    if let Some(scoped) = document.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped);
    }
    candidates
}

/// Walks parent directories from `start` looking for `symdoc.toml`.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(SETTINGS_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
#[path = "../../tests/src/config/config_tests.rs"]
mod tests;
