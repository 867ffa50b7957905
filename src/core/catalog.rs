//! Builder catalogs.
//!
//! A catalog maps builder names to the ordered command templates that build
//! a module of that kind. Two catalogs ship embedded in the binary (see
//! `build.rs`): the standard one, looked up by module type, and the custom
//! one, looked up by the builder a module names in its build parameters.
//! Either can be replaced by a file on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};

include!(concat!(env!("OUT_DIR"), "/generated_catalogs.rs"));

/// Which of the two catalogs a lookup goes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Standard,
    Custom,
}

impl CatalogKind {
    /// Label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Standard => "commands",
            CatalogKind::Custom => "custom commands",
        }
    }

    fn embedded_source(&self) -> &'static str {
        match self {
            CatalogKind::Standard => COMMANDS_CONFIG,
            CatalogKind::Custom => CUSTOM_COMMANDS_CONFIG,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderCatalog {
    #[serde(default)]
    pub builders: Vec<BuilderDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderDefinition {
    pub name: String,
    #[serde(default)]
    pub info: String,
    /// Command templates, run in order.
    #[serde(rename = "type", default)]
    pub commands: Vec<CommandTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTemplate {
    pub command: String,
}

impl BuilderCatalog {
    /// First definition named `name`. Ordering matters when names repeat.
    pub fn find(&self, name: &str) -> Option<&BuilderDefinition> {
        self.builders.iter().find(|b| b.name == name)
    }
}

/// Parse one catalog from YAML text.
pub fn parse(source: &str, kind: CatalogKind) -> Result<BuilderCatalog> {
    serde_yml::from_str(source).map_err(|e| {
        Error::config_parse(
            format!("the {} configuration file", kind.label()),
            e.to_string(),
        )
    })
}

/// Where each catalog comes from. `None` means the embedded copy.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub commands: Option<PathBuf>,
    pub custom_commands: Option<PathBuf>,
}

impl CatalogSources {
    pub fn is_embedded(&self) -> bool {
        self.commands.is_none() && self.custom_commands.is_none()
    }

    fn path_for(&self, kind: CatalogKind) -> Option<&Path> {
        match kind {
            CatalogKind::Standard => self.commands.as_deref(),
            CatalogKind::Custom => self.custom_commands.as_deref(),
        }
    }
}

/// The standard and custom catalog, loaded together.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub standard: BuilderCatalog,
    pub custom: BuilderCatalog,
}

impl Catalogs {
    pub fn new(standard: BuilderCatalog, custom: BuilderCatalog) -> Self {
        Self { standard, custom }
    }

    pub fn get(&self, kind: CatalogKind) -> &BuilderCatalog {
        match kind {
            CatalogKind::Standard => &self.standard,
            CatalogKind::Custom => &self.custom,
        }
    }

    /// Embedded catalogs, parsed once per process.
    pub fn embedded() -> Result<&'static Catalogs> {
        static EMBEDDED: OnceLock<Catalogs> = OnceLock::new();

        if let Some(catalogs) = EMBEDDED.get() {
            return Ok(catalogs);
        }
        let parsed = Self::parse_embedded()?;
        Ok(EMBEDDED.get_or_init(|| parsed))
    }

    fn parse_embedded() -> Result<Catalogs> {
        Ok(Self::new(
            parse(CatalogKind::Standard.embedded_source(), CatalogKind::Standard)?,
            parse(CatalogKind::Custom.embedded_source(), CatalogKind::Custom)?,
        ))
    }

    /// Load both catalogs, reading override files where configured.
    pub fn load(sources: &CatalogSources) -> Result<Catalogs> {
        if sources.is_embedded() {
            return Self::embedded().cloned();
        }

        Ok(Self::new(
            load_one(sources, CatalogKind::Standard)?,
            load_one(sources, CatalogKind::Custom)?,
        ))
    }
}

fn load_one(sources: &CatalogSources, kind: CatalogKind) -> Result<BuilderCatalog> {
    let Some(path) = sources.path_for(kind) else {
        return parse(kind.embedded_source(), kind);
    };

    crate::log_status!("catalog", "Loading {} from {}", kind.label(), path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("read {} configuration {}", kind.label(), path.display())),
        )
    })?;
    parse(&content, kind)
}
