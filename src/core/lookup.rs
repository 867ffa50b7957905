use crate::catalog::Catalogs;
use crate::descriptor::{DescriptorParser, Module, ProjectDescriptor};
use crate::error::{Error, Result};
use crate::resolver::provide_commands;

/// First module named `module_name`.
pub fn find_module<'a>(descriptor: &'a ProjectDescriptor, module_name: &str) -> Result<&'a Module> {
    descriptor
        .modules
        .iter()
        .find(|m| m.name == module_name)
        .ok_or_else(|| Error::module_not_found(module_name))
}

/// Find `module_name` in the descriptor and resolve its builder commands.
///
/// Returns the raw command strings; materializing them against the module
/// directory is left to the caller.
pub fn find_module_commands<'a>(
    descriptor: &'a ProjectDescriptor,
    catalogs: &Catalogs,
    module_name: &str,
) -> Result<(&'a Module, Vec<String>)> {
    let module = find_module(descriptor, module_name)?;
    let commands = provide_commands(module, catalogs)?;
    Ok((module, commands.command))
}

/// Parse the descriptor, then look the module up in it.
pub fn get_module_and_commands(
    parser: &impl DescriptorParser,
    catalogs: &Catalogs,
    module_name: &str,
) -> Result<(Module, Vec<String>)> {
    let descriptor = parser.parse_file()?;
    let (module, commands) = find_module_commands(&descriptor, catalogs, module_name)?;
    Ok((module.clone(), commands))
}
