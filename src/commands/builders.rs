use clap::Args;
use serde::Serialize;

use modbuild::catalog::{CatalogKind, CatalogSources};

use super::{load_catalogs, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct BuildersArgs {
    /// List the custom catalog instead of the standard one
    #[arg(long)]
    pub custom: bool,
}

#[derive(Debug, Serialize)]
pub struct BuilderSummary {
    pub name: String,
    pub info: String,
    pub commands: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildersOutput {
    pub command: String,
    pub catalog: CatalogKind,
    pub builders: Vec<BuilderSummary>,
}

pub fn run(args: BuildersArgs, global: &GlobalArgs) -> CmdResult<BuildersOutput> {
    let catalogs = load_catalogs(global, CatalogSources::default())?;
    let kind = if args.custom {
        CatalogKind::Custom
    } else {
        CatalogKind::Standard
    };

    let builders = catalogs
        .get(kind)
        .builders
        .iter()
        .map(|b| BuilderSummary {
            name: b.name.clone(),
            info: b.info.clone(),
            commands: b.commands.iter().map(|c| c.command.clone()).collect(),
        })
        .collect();

    Ok((
        BuildersOutput {
            command: "builders.list".to_string(),
            catalog: kind,
            builders,
        },
        0,
    ))
}
