use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;
mod tty;

use commands::{builders, resolve, validate, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "modbuild")]
#[command(version = VERSION)]
#[command(about = "Resolve builder commands and validate module layout for multi-module projects")]
struct Cli {
    /// Standard builder catalog to use instead of the embedded one
    #[arg(long, global = true, value_name = "FILE")]
    commands_config: Option<PathBuf>,

    /// Custom builder catalog to use instead of the embedded one
    #[arg(long, global = true, value_name = "FILE")]
    custom_commands_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the builder commands for a module
    #[command(name = "commands", visible_alias = "resolve")]
    Resolve(resolve::ResolveArgs),
    /// Check that every declared module exists on disk
    Validate(validate::ValidateArgs),
    /// List the builders of a catalog
    Builders(builders::BuildersArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        commands_config: cli.commands_config,
        custom_commands_config: cli.custom_commands_config,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
