use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use toml::Value;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "out";
pub const DEFAULT_ROOT_NAME: &str = "docs";
pub const DEFAULT_SLIM_FILE_NAME: &str = "docs.md";

#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub directory: PathBuf,
    /// Name of the path tree root; every page path starts with it.
    pub root_name: String,
    pub slim: bool,
    pub slim_file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            slim: false,
            slim_file_name: DEFAULT_SLIM_FILE_NAME.to_string(),
        }
    }
}

impl OutputSettings {
    pub fn slim_file(&self) -> PathBuf {
        self.directory.join(&self.slim_file_name)
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: OutputSettingsPatch,
    ) {
        if let Some(v) = patch.directory {
            self.directory = v;
        }
        if let Some(v) = patch.root_name {
            self.root_name = v;
        }
        if let Some(v) = patch.slim {
            self.slim = v;
        }
        if let Some(v) = patch.slim_file_name {
            self.slim_file_name = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.root_name = self.root_name.trim().trim_matches('/').to_string();
        if self.root_name.is_empty() {
            self.root_name = DEFAULT_ROOT_NAME.to_string();
        }
        self.slim_file_name = self.slim_file_name.trim().to_string();
        if self.slim_file_name.is_empty() {
            self.slim_file_name = DEFAULT_SLIM_FILE_NAME.to_string();
        }
        if self.directory.as_os_str().is_empty() {
            self.directory = PathBuf::from(DEFAULT_OUTPUT_DIRECTORY);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct OutputSettingsPatch {
    pub(crate) directory: Option<PathBuf>,
    pub(crate) root_name: Option<String>,
    pub(crate) slim: Option<bool>,
    pub(crate) slim_file_name: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
