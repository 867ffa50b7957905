//! Project descriptor records.
//!
//! The descriptor (`mta.yaml` by default) lists the modules of a project.
//! Only the fields builder resolution and layout validation need are
//! modelled; everything else in the file is ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogKind;
use crate::error::{Error, Result};

pub const DEFAULT_DESCRIPTOR_FILE: &str = "mta.yaml";

/// Build parameter key that opts a module into the custom catalog.
const BUILDER_PARAM: &str = "builder";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(rename = "type", default)]
    pub module_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(
        rename = "build-parameters",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub build_parameters: BTreeMap<String, serde_yml::Value>,
}

/// Builder a module asks for, and which catalog to look it up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderSelection {
    Standard(String),
    Custom(String),
}

impl BuilderSelection {
    pub fn name(&self) -> &str {
        match self {
            BuilderSelection::Standard(name) | BuilderSelection::Custom(name) => name,
        }
    }

    pub fn catalog(&self) -> CatalogKind {
        match self {
            BuilderSelection::Standard(_) => CatalogKind::Standard,
            BuilderSelection::Custom(_) => CatalogKind::Custom,
        }
    }
}

impl Module {
    /// Any `build-parameters.builder` selects the custom catalog, whatever
    /// scalar it holds; otherwise the module type names a standard builder.
    pub fn builder(&self) -> Result<BuilderSelection> {
        let Some(value) = self.build_parameters.get(BUILDER_PARAM) else {
            return Ok(BuilderSelection::Standard(self.module_type.clone()));
        };

        let name = match value {
            serde_yml::Value::String(s) => s.clone(),
            serde_yml::Value::Number(n) => n.to_string(),
            serde_yml::Value::Bool(b) => b.to_string(),
            _ => {
                return Err(Error::validation_invalid_argument(
                    "build-parameters.builder",
                    format!(
                        "Module '{}' declares a builder that is not a string, number or boolean",
                        self.name
                    ),
                ))
            }
        };
        Ok(BuilderSelection::Custom(name))
    }

    /// Directory of the module relative to the project root.
    pub fn effective_path(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => &self.name,
        }
    }

    pub fn dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.effective_path())
    }
}

/// Source of a parsed project descriptor.
pub trait DescriptorParser {
    fn parse_file(&self) -> Result<ProjectDescriptor>;
}

/// Descriptor read from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlDescriptorFile {
    path: PathBuf,
}

impl YamlDescriptorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<project_root>/<file_name>`.
    pub fn in_project(project_root: &Path, file_name: &str) -> Self {
        Self::new(project_root.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DescriptorParser for YamlDescriptorFile {
    fn parse_file(&self) -> Result<ProjectDescriptor> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("read descriptor {}", self.path.display())),
            )
            .with_hint("Pass --project-dir or --descriptor to point at the project descriptor")
        })?;

        parse_descriptor(&content)
            .map_err(|e| e.with_context(format!("descriptor {}", self.path.display())))
    }
}

pub fn parse_descriptor(content: &str) -> Result<ProjectDescriptor> {
    serde_yml::from_str(content)
        .map_err(|e| Error::config_parse("the project descriptor", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"
ID: com.example.shop
version: 1.0.0
modules:
  - name: ui
    type: html5
    path: web/ui
  - name: srv
    type: nodejs
    build-parameters:
      builder: grunt
  - name: db
    type: hdb
    path: ""
"#;

    #[test]
    fn parses_modules_in_order() {
        let descriptor = parse_descriptor(DESCRIPTOR).unwrap();

        assert_eq!(descriptor.id, "com.example.shop");
        let names: Vec<&str> = descriptor.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ui", "srv", "db"]);
    }

    #[test]
    fn builder_parameter_selects_custom_catalog() {
        let descriptor = parse_descriptor(DESCRIPTOR).unwrap();

        assert_eq!(
            descriptor.modules[0].builder().unwrap(),
            BuilderSelection::Standard("html5".to_string())
        );
        assert_eq!(
            descriptor.modules[1].builder().unwrap(),
            BuilderSelection::Custom("grunt".to_string())
        );
        assert_eq!(
            descriptor.modules[1].builder().unwrap().catalog(),
            CatalogKind::Custom
        );
    }

    #[test]
    fn scalar_builder_values_select_custom_catalog() {
        let descriptor = parse_descriptor(
            r#"
modules:
  - name: numeric
    type: html5
    build-parameters:
      builder: 2
  - name: flag
    type: html5
    build-parameters:
      builder: true
"#,
        )
        .unwrap();

        assert_eq!(
            descriptor.modules[0].builder().unwrap(),
            BuilderSelection::Custom("2".to_string())
        );
        assert_eq!(
            descriptor.modules[1].builder().unwrap(),
            BuilderSelection::Custom("true".to_string())
        );
    }

    #[test]
    fn structured_builder_value_is_rejected() {
        let descriptor = parse_descriptor(
            r#"
modules:
  - name: odd
    type: html5
    build-parameters:
      builder:
        name: npm
  - name: blank
    type: html5
    build-parameters:
      builder:
"#,
        )
        .unwrap();

        for module in &descriptor.modules {
            let err = module.builder().unwrap_err();
            assert_eq!(err.code, crate::error::ErrorCode::ValidationInvalidArgument);
            assert!(err.message.contains(&format!("'{}'", module.name)));
        }
    }

    #[test]
    fn effective_path_falls_back_to_name() {
        let descriptor = parse_descriptor(DESCRIPTOR).unwrap();

        assert_eq!(descriptor.modules[0].effective_path(), "web/ui");
        assert_eq!(descriptor.modules[1].effective_path(), "srv");
        assert_eq!(descriptor.modules[2].effective_path(), "db");
    }

    #[test]
    fn yaml_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = YamlDescriptorFile::in_project(dir.path(), DEFAULT_DESCRIPTOR_FILE)
            .parse_file()
            .unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::InternalIoError);
    }

    #[test]
    fn yaml_file_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mta.yaml");
        fs::write(&path, "modules: {name: [").unwrap();

        let err = YamlDescriptorFile::new(&path).parse_file().unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::ConfigParseFailed);
        assert!(err.message.starts_with("descriptor "));
    }
}
