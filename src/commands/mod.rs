use clap::Args;
use std::path::PathBuf;

use modbuild::catalog::{CatalogSources, Catalogs};
use modbuild::config::{self, resolve_path, ProjectConfig};
use modbuild::descriptor::YamlDescriptorFile;

pub type CmdResult<T> = modbuild::Result<(T, i32)>;

/// Options shared by every subcommand.
#[derive(Default)]
pub(crate) struct GlobalArgs {
    pub commands_config: Option<PathBuf>,
    pub custom_commands_config: Option<PathBuf>,
}

/// Where the project lives and which descriptor to read.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project directory
    #[arg(long, short = 'p', default_value = ".")]
    pub project_dir: String,

    /// Descriptor file (relative to the project directory unless absolute)
    #[arg(long, short = 'f')]
    pub descriptor: Option<String>,
}

/// Project directory plus its settings, flags applied.
pub(crate) struct ProjectContext {
    pub dir: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectContext {
    pub fn load(args: &ProjectArgs) -> modbuild::Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            modbuild::Error::internal_io(e.to_string(), Some("read current directory".to_string()))
        })?;
        let dir = resolve_path(&cwd, &args.project_dir);
        let mut config = config::load(&dir)?;
        if let Some(descriptor) = &args.descriptor {
            config.descriptor = descriptor.clone();
        }
        Ok(Self { dir, config })
    }

    pub fn descriptor(&self) -> YamlDescriptorFile {
        YamlDescriptorFile::new(self.config.descriptor_path(&self.dir))
    }

    pub fn catalogs(&self, global: &GlobalArgs) -> modbuild::Result<Catalogs> {
        load_catalogs(global, self.config.catalog_sources(&self.dir))
    }
}

/// Flags win over project settings; anything left unset is embedded.
pub(crate) fn load_catalogs(
    global: &GlobalArgs,
    mut sources: CatalogSources,
) -> modbuild::Result<Catalogs> {
    if let Some(path) = &global.commands_config {
        sources.commands = Some(path.clone());
    }
    if let Some(path) = &global.custom_commands_config {
        sources.custom_commands = Some(path.clone());
    }
    Catalogs::load(&sources)
}

pub mod builders;
pub mod resolve;
pub mod validate;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (modbuild::Result<serde_json::Value>, i32) {
    crate::tty::status("modbuild is working...");

    match command {
        crate::Commands::Resolve(args) => dispatch!(args, global, resolve),
        crate::Commands::Validate(args) => dispatch!(args, global, validate),
        crate::Commands::Builders(args) => dispatch!(args, global, builders),
    }
}
