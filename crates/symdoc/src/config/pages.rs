use std::collections::HashMap;

use serde::Deserialize;
use toml::Value;

use crate::pages::PageOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Spacer between overloads on constructor and method group pages.
    pub method_group_spacing: bool,
    /// Document protected members alongside public ones.
    pub include_protected: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            method_group_spacing: false,
            include_protected: true,
        }
    }
}

impl PageSettings {
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            method_group_spacing: self.method_group_spacing,
        }
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: PageSettingsPatch,
    ) {
        if let Some(v) = patch.method_group_spacing {
            self.method_group_spacing = v;
        }
        if let Some(v) = patch.include_protected {
            self.include_protected = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct PageSettingsPatch {
    pub(crate) method_group_spacing: Option<bool>,
    pub(crate) include_protected: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
