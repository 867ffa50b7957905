use clap::Args;
use serde::Serialize;

use modbuild::descriptor::DescriptorParser;
use modbuild::validate::{validate_project, ValidationIssue};

use super::{CmdResult, GlobalArgs, ProjectArgs, ProjectContext};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    pub command: String,
    pub project_dir: String,
    pub descriptor: String,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

pub fn run(args: ValidateArgs, _global: &GlobalArgs) -> CmdResult<ValidateOutput> {
    let context = ProjectContext::load(&args.project)?;
    let parser = context.descriptor();
    let descriptor = parser.parse_file()?;

    let issues = validate_project(&descriptor, &context.dir);
    let exit_code = if issues.is_empty() { 0 } else { 1 };

    Ok((
        ValidateOutput {
            command: "validate".to_string(),
            project_dir: context.dir.to_string_lossy().to_string(),
            descriptor: parser.path().to_string_lossy().to_string(),
            valid: issues.is_empty(),
            issues,
        },
        exit_code,
    ))
}
