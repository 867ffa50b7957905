use clap::Args;
use serde::Serialize;

use modbuild::catalog::CatalogKind;
use modbuild::descriptor::DescriptorParser;
use modbuild::lookup::find_module;
use modbuild::materialize::materialize;
use modbuild::resolver::{provide_commands, CommandList};

use super::{CmdResult, GlobalArgs, ProjectArgs, ProjectContext};

#[derive(Args)]
pub struct ResolveArgs {
    /// Module name as declared in the project descriptor
    pub module: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub command: String,
    pub module: String,
    pub module_dir: String,
    pub builder: String,
    pub catalog: CatalogKind,
    pub info: String,
    pub commands: Vec<String>,
    pub argv: Vec<Vec<String>>,
}

pub fn run(args: ResolveArgs, global: &GlobalArgs) -> CmdResult<ResolveOutput> {
    if args.module.trim().is_empty() {
        return Err(modbuild::Error::validation_invalid_argument(
            "module",
            "Module name cannot be empty",
        ));
    }

    let context = ProjectContext::load(&args.project)?;
    let catalogs = context.catalogs(global)?;

    let descriptor = context.descriptor().parse_file()?;
    let module = find_module(&descriptor, &args.module)?;
    let selection = module.builder()?;
    let CommandList { info, command: commands } = provide_commands(module, &catalogs)?;

    let module_dir = module.dir(&context.dir).to_string_lossy().to_string();
    modbuild::log_status!(
        "commands",
        "{} uses the {} builder ({} commands)",
        module.name,
        selection.name(),
        commands.len()
    );
    let argv = materialize(&module_dir, &commands);

    Ok((
        ResolveOutput {
            command: "commands.resolve".to_string(),
            module: module.name.clone(),
            module_dir,
            builder: selection.name().to_string(),
            catalog: selection.catalog(),
            info,
            commands,
            argv,
        },
        0,
    ))
}
