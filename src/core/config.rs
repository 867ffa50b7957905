use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::catalog::CatalogSources;
use crate::descriptor::DEFAULT_DESCRIPTOR_FILE;
use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "modbuild.json";

/// Per-project settings read from `modbuild.json` in the project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Descriptor file, relative to the project directory.
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Replaces the embedded standard catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands_config: Option<String>,

    /// Replaces the embedded custom catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_commands_config: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            commands_config: None,
            custom_commands_config: None,
        }
    }
}

fn default_descriptor() -> String {
    DEFAULT_DESCRIPTOR_FILE.to_string()
}

/// Expand `~`, anchor relative paths at `base` and drop `.` segments.
pub fn resolve_path(base: &Path, raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw);
    let path = PathBuf::from(expanded.as_ref());
    let joined = if path.is_absolute() {
        path
    } else {
        base.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl ProjectConfig {
    pub fn descriptor_path(&self, project_dir: &Path) -> PathBuf {
        resolve_path(project_dir, &self.descriptor)
    }

    pub fn catalog_sources(&self, project_dir: &Path) -> CatalogSources {
        CatalogSources {
            commands: self
                .commands_config
                .as_deref()
                .map(|p| resolve_path(project_dir, p)),
            custom_commands: self
                .custom_commands_config
                .as_deref()
                .map(|p| resolve_path(project_dir, p)),
        }
    }
}

/// Load `modbuild.json` from `project_dir`. A missing file means defaults;
/// an unreadable or malformed one is an error.
pub fn load(project_dir: &Path) -> Result<ProjectConfig> {
    let path = project_dir.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_parse(path.display().to_string(), e.to_string()))
}
